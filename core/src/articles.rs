//! Append-only article registry with duplicate suppression.

use crate::error::RegisterError;
use crate::ArticleId;
use serde::Serialize;
use std::collections::HashSet;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    /// Host component of `url`, or empty when the URL is not absolute.
    pub server: String,
}

/// Host name of an absolute URL; empty when there is none.
pub fn server_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_default()
}

/// ID for the article appended after `len` existing ones.
fn next_id(len: usize) -> Result<ArticleId, RegisterError> {
    ArticleId::try_from(len).map_err(|_| RegisterError::TooManyArticles)
}

/// Articles addressed by dense, zero-based IDs in registration order.
///
/// A URL string may be registered once, and independently a (server, title)
/// pair may be registered once. Both checks are exact and case-sensitive.
#[derive(Debug, Default)]
pub struct ArticleRegistry {
    articles: Vec<Article>,
    seen_urls: HashSet<String>,
    seen_server_titles: HashSet<(String, String)>,
}

impl ArticleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            articles: Vec::with_capacity(capacity),
            seen_urls: HashSet::with_capacity(capacity),
            seen_server_titles: HashSet::with_capacity(capacity),
        }
    }

    /// Register an article, returning its ID. A missing title is stored as "".
    pub fn register(&mut self, url: &str, title: Option<&str>) -> Result<ArticleId, RegisterError> {
        if url.is_empty() {
            return Err(RegisterError::MissingUrl);
        }
        if self.seen_urls.contains(url) {
            return Err(RegisterError::DuplicateUrl(url.to_owned()));
        }
        let server = server_name(url);
        let title = title.unwrap_or("").to_owned();
        let key = (server, title);
        if self.seen_server_titles.contains(&key) {
            let (server, title) = key;
            return Err(RegisterError::DuplicateServerTitle { server, title });
        }

        let id = next_id(self.articles.len())?;
        self.seen_urls.insert(url.to_owned());
        self.seen_server_titles.insert(key.clone());
        let (server, title) = key;
        self.articles.push(Article { url: url.to_owned(), title, server });
        Ok(id)
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id as usize)
    }

    pub fn title(&self, id: ArticleId) -> Option<&str> {
        self.get(id).map(|a| a.title.as_str())
    }

    pub fn url(&self, id: ArticleId) -> Option<&str> {
        self.get(id).map(|a| a.url.as_str())
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        (id as usize) < self.articles.len()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArticleId, &Article)> {
        self.articles.iter().enumerate().map(|(i, a)| (i as ArticleId, a))
    }
}
