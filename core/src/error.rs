//! Error types for the news index.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by index operations that touch external resources.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The stop-word file could not be opened or read.
    #[error("failed to read stop words from {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A caller-supplied stop-word reader failed.
    #[error("failed to read stop words: {0}")]
    Read(#[source] std::io::Error),
}

/// Reasons an article registration is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("article URL is missing")]
    MissingUrl,

    #[error("article URL already registered: {0}")]
    DuplicateUrl(String),

    #[error("article titled {title:?} already registered for server {server:?}")]
    DuplicateServerTitle { server: String, title: String },

    #[error("article ID space exhausted")]
    TooManyArticles,
}

pub type Result<T> = std::result::Result<T, IndexError>;
