//! Occurrence counting: normalize, fetch the pattern, scan.

use std::sync::Arc;

use once_cell::sync::Lazy;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::cache::{PatternBuilder, PatternCache};
use super::normalizer::normalize;
use super::pattern::CompiledPattern;

/// Counts word and phrase occurrences in text.
///
/// Cloning a `Counter` is cheap and keeps the same pattern cache.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    builder: PatternBuilder,
}

impl Counter {
    /// Creates a counter with an isolated, empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter that reads and fills `cache`.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self {
            builder: PatternBuilder::with_cache(cache),
        }
    }

    /// Process-wide counter backing [`count_occurrences`].
    pub fn shared() -> &'static Counter {
        static SHARED: Lazy<Counter> = Lazy::new(Counter::new);
        &SHARED
    }

    pub fn builder(&self) -> &PatternBuilder {
        &self.builder
    }

    /// Returns the compiled pattern for `word`, building it if needed.
    pub fn pattern(&self, word: &str) -> Arc<CompiledPattern> {
        self.builder.build(word)
    }

    /// Pre-builds patterns so later counts only scan.
    pub fn warm<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.builder.build(word.as_ref());
        }
    }

    /// Counts non-overlapping occurrences of `word` in `text`.
    pub fn count(&self, word: &str, text: &str) -> usize {
        let normalized = normalize(text);
        self.pattern(word).count(&normalized)
    }

    /// Counts every word in `words` against `text`, normalizing it once.
    ///
    /// Results are in the same order as `words`.
    pub fn count_many<S>(&self, words: &[S], text: &str) -> Vec<usize>
    where
        S: AsRef<str> + Sync,
    {
        let normalized = normalize(text);

        #[cfg(feature = "parallel")]
        let counts = words
            .par_iter()
            .map(|word| self.pattern(word.as_ref()).count(&normalized))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let counts = words
            .iter()
            .map(|word| self.pattern(word.as_ref()).count(&normalized))
            .collect();

        counts
    }
}

/// Counts `word` in `text` using a process-wide pattern cache.
pub fn count_occurrences(word: &str, text: &str) -> usize {
    Counter::shared().count(word, text)
}

/// Counts an already-built pattern in raw (not yet normalized) text.
pub fn count_with_pattern(pattern: &CompiledPattern, text: &str) -> usize {
    pattern.count(&normalize(text))
}
