//! Case-insensitive stop-word set.
//!
//! Words are stored ASCII-lowercased; lookups lowercase their input the same way.

use crate::error::{IndexError, Result};
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

const STOP_WORD_CAPACITY: usize = 1009;

#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new()
    }
}

impl StopWords {
    pub fn new() -> Self {
        Self { words: HashSet::with_capacity(STOP_WORD_CAPACITY) }
    }

    /// Load stop words from a line-oriented file, adding to any already present.
    ///
    /// Returns the number of tokens read. On error the words read so far stay loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let io_err = |source| IndexError::Io { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(io_err)?;
        let n = self.load_from_reader(BufReader::new(file)).map_err(io_err)?;
        tracing::info!(path = %path.display(), read = n, total = self.words.len(), "loaded stop words");
        Ok(n)
    }

    /// Read whitespace/line-delimited tokens from `reader`; empty tokens are skipped.
    ///
    /// Lines are decoded lossily, so bytes that are not UTF-8 never end the load.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let mut read = 0;
        for line in reader.split(b'\n') {
            let line = line?;
            let text = String::from_utf8_lossy(&line);
            if matches!(text, Cow::Owned(_)) {
                tracing::warn!(line = %text.trim_end(), "stop word line is not valid UTF-8");
            }
            for token in text.split_whitespace() {
                self.insert(token);
                read += 1;
            }
        }
        Ok(read)
    }

    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_ascii_lowercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_lowercase().as_str())
    }

    /// Membership test for a word the caller already lowercased.
    pub(crate) fn contains_lowercase(&self, lower: &str) -> bool {
        self.words.contains(lower)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
