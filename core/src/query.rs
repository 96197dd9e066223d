//! Top-N ranking over a word's postings.

use crate::words::Posting;
use std::cmp::Ordering;

/// Count descending, then article ID ascending.
pub fn rank_order(a: &Posting, b: &Posting) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.article_id.cmp(&b.article_id))
}

/// Copy `postings`, rank them by [`rank_order`] and keep the first `n`.
pub fn top_n(postings: &[Posting], n: usize) -> Vec<Posting> {
    if n == 0 || postings.is_empty() {
        return Vec::new();
    }
    let mut ranked = postings.to_vec();
    ranked.sort_by(rank_order);
    ranked.truncate(n);
    ranked
}
