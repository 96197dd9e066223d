use serde::Deserialize;

/// Word-table size used when no usable hint is given.
pub const DEFAULT_WORD_CAPACITY: usize = 10007;
/// Initial room in the article registry.
pub const DEFAULT_ARTICLE_CAPACITY: usize = 16;

/// Sizing hints for a fresh [`Index`](crate::Index).
///
/// Hints only pre-size the underlying containers; the index grows past them freely.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub word_capacity: usize,
    pub article_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { word_capacity: DEFAULT_WORD_CAPACITY, article_capacity: DEFAULT_ARTICLE_CAPACITY }
    }
}

impl IndexConfig {
    /// Config with the given word-table hint; `0` falls back to the default.
    pub fn with_word_capacity(hint: usize) -> Self {
        let word_capacity = if hint == 0 { DEFAULT_WORD_CAPACITY } else { hint };
        Self { word_capacity, ..Self::default() }
    }
}
