//! In-memory inverted index over short articles.
//!
//! Articles are registered once (duplicates by URL or by server and title are
//! rejected), their word tokens are accumulated into per-article occurrence
//! counts, and a word can then be queried for its top-N articles.

pub mod articles;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod stopwords;
pub mod tokenizer;
pub mod words;

pub use articles::{Article, ArticleRegistry};
pub use config::IndexConfig;
pub use error::{IndexError, RegisterError, Result};
pub use index::Index;
pub use stopwords::StopWords;
pub use words::{Posting, WordEntry, WordIndex};

/// Zero-based position of an article in registration order.
pub type ArticleId = u32;
