//! Word → postings storage.

use crate::ArticleId;
use serde::Serialize;
use std::collections::HashMap;

/// Occurrences of one word in one article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub article_id: ArticleId,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct WordEntry {
    /// Lowercased canonical form.
    pub word: String,
    /// At most one posting per article, in first-seen order.
    pub postings: Vec<Posting>,
}

impl WordEntry {
    fn new(word: String) -> Self {
        Self { word, postings: Vec::new() }
    }

    /// Bump the count for `article_id`, adding a posting on first sight.
    ///
    /// Linear scan: a postings list is bounded by the number of articles
    /// containing the word, not by token volume.
    fn record(&mut self, article_id: ArticleId) {
        match self.postings.iter_mut().find(|p| p.article_id == article_id) {
            Some(p) => p.count = p.count.saturating_add(1),
            None => self.postings.push(Posting { article_id, count: 1 }),
        }
    }
}

/// Map from lowercased word to its [`WordEntry`].
///
/// Callers are expected to hand in words already lowercased; the map itself
/// does no case folding.
#[derive(Debug, Default)]
pub struct WordIndex {
    entries: HashMap<String, WordEntry>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: HashMap::with_capacity(capacity) }
    }

    /// Count one occurrence of `word` in `article_id`.
    pub fn record(&mut self, word: String, article_id: ArticleId) {
        self.entries
            .entry(word)
            .or_insert_with_key(|w| WordEntry::new(w.clone()))
            .record(article_id);
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
