//! Text source trait and counting report types.
//!
//! A source turns a document on disk into raw text; the service then cleans
//! that text and hands it to the counter.

use crate::error::LexcountResult;
use std::path::Path;

/// Count for a single search word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// The word exactly as the caller supplied it
    pub word: String,

    /// Non-overlapping occurrences in the cleaned text
    pub count: usize,
}

/// Statistics about a counting operation.
#[derive(Debug, Clone, Default)]
pub struct CountReport {
    /// One entry per requested word, in request order
    pub counts: Vec<WordCount>,

    /// Length in bytes of the cleaned text that was scanned
    pub text_len: usize,
}

impl CountReport {
    /// Creates a report with no entries.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sum of all per-word counts.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|c| c.count).sum()
    }

    /// Returns true if any word occurred at least once.
    pub fn has_matches(&self) -> bool {
        self.counts.iter().any(|c| c.count > 0)
    }

    /// Looks up the count recorded for `word` (as originally supplied).
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.iter().find(|c| c.word == word).map(|c| c.count)
    }
}

/// Strategy for pulling raw text out of a document.
pub trait TextSource: Send + Sync {
    /// Extracts the full text of `input`.
    ///
    /// Missing or unreadable documents are reported as
    /// [`LexcountError::SourceUnavailable`](crate::error::LexcountError::SourceUnavailable).
    fn extract_text(&self, input: &Path) -> LexcountResult<String>;

    /// Returns a human-readable name for this source.
    fn name(&self) -> &str;
}
