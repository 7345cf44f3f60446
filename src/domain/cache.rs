//! Pattern cache and the builder that fills it.

use std::sync::Arc;

use dashmap::DashMap;

use super::pattern::{CompiledPattern, PatternKey};

/// Write-once map from folded key to its compiled pattern.
///
/// Safe to share between threads. Readers of a published entry never wait on
/// writers of other keys, and two threads racing on the same key end up with
/// equivalent patterns; whichever insert lands first is kept.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: DashMap<PatternKey, Arc<CompiledPattern>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached pattern for `key`, if any.
    pub fn get(&self, key: &PatternKey) -> Option<Arc<CompiledPattern>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Returns the pattern for `key`, building and publishing it on a miss.
    pub fn get_or_build(&self, key: PatternKey) -> Arc<CompiledPattern> {
        if let Some(hit) = self.get(&key) {
            tracing::trace!(key = %key, "pattern cache hit");
            return hit;
        }

        let entry = self.entries.entry(key.clone()).or_insert_with(move || {
            let pattern = CompiledPattern::new(key);
            tracing::debug!(key = %pattern.key(), kind = ?pattern.kind(), "compiled pattern");
            Arc::new(pattern)
        });
        Arc::clone(entry.value())
    }

    pub fn contains(&self, key: &PatternKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns search words into compiled patterns, memoized by folded key.
#[derive(Debug, Clone, Default)]
pub struct PatternBuilder {
    cache: Arc<PatternCache>,
}

impl PatternBuilder {
    /// Creates a builder with its own empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder backed by an existing (possibly shared) cache.
    pub fn with_cache(cache: Arc<PatternCache>) -> Self {
        Self { cache }
    }

    /// Returns the compiled pattern for `word`.
    ///
    /// Words that fold to the same key share one pattern.
    pub fn build(&self, word: &str) -> Arc<CompiledPattern> {
        self.cache.get_or_build(PatternKey::from_word(word))
    }

    pub fn cache(&self) -> &Arc<PatternCache> {
        &self.cache
    }
}
