//! The [`Index`] facade: stop words, article registry and word postings under one owner.

use crate::articles::{Article, ArticleRegistry};
use crate::config::IndexConfig;
use crate::error::{IndexError, RegisterError, Result};
use crate::query;
use crate::stopwords::StopWords;
use crate::tokenizer::tokenize;
use crate::words::{Posting, WordIndex};
use crate::ArticleId;
use std::io::BufRead;
use std::path::Path;

#[derive(Debug)]
pub struct Index {
    stop_words: StopWords,
    articles: ArticleRegistry,
    words: WordIndex,
}

impl Default for Index {
    fn default() -> Self {
        Self::new()
    }
}

impl Index {
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Empty index whose word table is pre-sized to `hint` (`0` means the default).
    pub fn with_capacity(hint: usize) -> Self {
        Self::with_config(IndexConfig::with_word_capacity(hint))
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            stop_words: StopWords::new(),
            articles: ArticleRegistry::with_capacity(config.article_capacity),
            words: WordIndex::with_capacity(config.word_capacity),
        }
    }

    /// Add the stop words listed in `path`. See [`StopWords::load`].
    pub fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.stop_words.load(path)
    }

    /// Add stop words from any line-oriented reader. See [`StopWords::load_from_reader`].
    pub fn load_stop_words_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        self.stop_words
            .load_from_reader(reader)
            .map_err(IndexError::Read)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn register_article(&mut self, url: &str, title: Option<&str>) -> std::result::Result<ArticleId, RegisterError> {
        match self.articles.register(url, title) {
            Ok(id) => {
                tracing::trace!(id, url, "registered article");
                Ok(id)
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "article rejected");
                Err(e)
            }
        }
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.get(id)
    }

    pub fn article_title(&self, id: ArticleId) -> Option<&str> {
        self.articles.title(id)
    }

    pub fn article_url(&self, id: ArticleId) -> Option<&str> {
        self.articles.url(id)
    }

    pub fn articles(&self) -> &ArticleRegistry {
        &self.articles
    }

    /// Count one occurrence of `token` in article `id`.
    ///
    /// Silently ignored when `id` is not registered, the token is empty, or it
    /// is a stop word.
    pub fn add_token(&mut self, id: ArticleId, token: &str) {
        if token.is_empty() || !self.articles.contains(id) {
            return;
        }
        let lower = token.to_ascii_lowercase();
        if self.stop_words.contains_lowercase(&lower) {
            return;
        }
        self.words.record(lower, id);
    }

    pub fn add_tokens<'a, I>(&mut self, id: ArticleId, tokens: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for token in tokens {
            self.add_token(id, token);
        }
    }

    /// Register an article and index every token of `body` under it.
    pub fn ingest(&mut self, url: &str, title: Option<&str>, body: &str) -> std::result::Result<ArticleId, RegisterError> {
        let id = self.register_article(url, title)?;
        self.add_tokens(id, tokenize(body));
        Ok(id)
    }

    /// Up to `n` postings for `word`, by count descending then article ID ascending.
    ///
    /// Always returns a vector; it is empty when the word is unknown or `n` is 0.
    pub fn query_top_n(&self, word: &str, n: usize) -> Vec<Posting> {
        if n == 0 {
            return Vec::new();
        }
        self.postings(word).map(|p| query::top_n(p, n)).unwrap_or_default()
    }

    /// Unranked postings for `word`, matched case-insensitively.
    pub fn postings(&self, word: &str) -> Option<&[Posting]> {
        self.words.get(&word.to_ascii_lowercase()).map(|e| e.postings.as_slice())
    }

    pub fn num_articles(&self) -> usize {
        self.articles.len()
    }

    pub fn num_words(&self) -> usize {
        self.words.len()
    }
}
