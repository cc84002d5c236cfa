//! Bounded LRU cache for analyses of short inputs.
//!
//! Only trimmed inputs of at most `max_key_chars` characters are cached; the key is the
//! trimmed text as-is, so differently-cased inputs are distinct entries. The lock is never
//! held while computing, so concurrent misses on one key may compute twice. That is
//! harmless because analysis is deterministic.

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;

use super::AnalysisResult;

pub struct AnalysisCache {
    /// `None` when capacity is zero: caching disabled.
    entries: Option<Mutex<LruCache<String, AnalysisResult>>>,
    max_key_chars: usize,
}

impl AnalysisCache {
    pub fn new(capacity: usize, max_key_chars: usize) -> Self {
        let entries = NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap)));
        Self {
            entries,
            max_key_chars,
        }
    }

    pub fn from_config(config: &crate::config::CacheConfig) -> Self {
        Self::new(config.capacity, config.max_key_chars)
    }

    /// Whether `text` would be cached. Expects already-trimmed text.
    pub fn is_eligible(&self, text: &str) -> bool {
        self.entries.is_some() && text.chars().count() <= self.max_key_chars
    }

    /// Return the cached analysis for `text`, or run `compute` and cache its result.
    /// Errors from `compute` are returned and never cached.
    pub fn lookup_or_compute<F, E>(&self, text: &str, compute: F) -> Result<AnalysisResult, E>
    where
        F: FnOnce() -> Result<AnalysisResult, E>,
    {
        let key = text.trim();
        let Some(entries) = self.entries.as_ref().filter(|_| self.is_eligible(key)) else {
            tracing::debug!(chars = key.chars().count(), "cache bypassed");
            return compute();
        };

        if let Some(hit) = lock(entries).get(key) {
            tracing::debug!(key, "cache hit");
            return Ok(hit.clone());
        }

        tracing::debug!(key, "cache miss");
        let result = compute()?;
        lock(entries).put(key.to_string(), result.clone());
        Ok(result)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|entries| lock(entries).contains(text.trim()))
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| lock(entries).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| lock(entries).cap().get())
    }

    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            lock(entries).clear();
        }
    }
}

/// The cache holds plain values, so a panic mid-update cannot leave it inconsistent.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
