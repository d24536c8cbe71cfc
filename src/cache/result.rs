//! Opt-in LRU + TTL cache for analysis results.
//!
//! Keyed on a content hash of `(layer, text)`. Base and calibrated results
//! for the same text live side by side, so a calibrated lookup after a base
//! analysis still misses once and then reuses the cached base result.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;

use super::Layer;
use crate::telemetry;
use crate::types::AnalysisResult;

/// Configuration for the result cache.
///
/// ```rust
/// # use huginn::CacheConfig;
/// # use std::time::Duration;
/// let config = CacheConfig::new()
///     .max_entries(50_000)
///     .ttl(Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of cached entries. Default: 10,000.
    pub max_entries: u64,
    /// Time-to-live for cached entries. Default: 1 hour.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000,
            ttl: Duration::from_secs(3600),
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_entries(mut self, n: u64) -> Self {
        self.max_entries = n;
        self
    }

    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// In-memory cache of analysis results.
///
/// Thread-safe; moka synchronizes internally.
pub struct ResultCache {
    cache: Cache<u64, AnalysisResult>,
}

impl ResultCache {
    pub fn new(config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_entries)
            .time_to_live(config.ttl)
            .build();
        Self { cache }
    }

    /// Look up a result. Emits hit/miss metrics.
    pub fn get(&self, layer: Layer, text: &str) -> Option<AnalysisResult> {
        let hit = self.cache.get(&cache_key(layer, text));
        if hit.is_some() {
            debug!(layer = layer.as_str(), "result cache hit");
            metrics::counter!(telemetry::CACHE_HITS_TOTAL, "layer" => layer.as_str()).increment(1);
        } else {
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL, "layer" => layer.as_str())
                .increment(1);
        }
        hit
    }

    pub fn insert(&self, layer: Layer, text: &str, result: AnalysisResult) {
        self.cache.insert(cache_key(layer, text), result);
    }

    /// Approximate entry count (moka applies writes lazily).
    pub fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

/// Content hash of `(layer, text)`.
///
/// `DefaultHasher` is deterministic within a process, which is all an
/// in-memory cache needs.
fn cache_key(layer: Layer, text: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    layer.hash(&mut hasher);
    text.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SentimentLabel;

    fn positive() -> AnalysisResult {
        AnalysisResult {
            polarity: 0.5,
            label: SentimentLabel::Positive,
            ..AnalysisResult::neutral()
        }
    }

    #[test]
    fn layers_are_separate_namespaces() {
        let cache = ResultCache::new(&CacheConfig::new().max_entries(10));
        cache.insert(Layer::Base, "hello", positive());

        assert_eq!(cache.get(Layer::Base, "hello"), Some(positive()));
        assert_eq!(cache.get(Layer::Calibrated, "hello"), None);
    }

    #[test]
    fn keys_are_deterministic() {
        assert_eq!(cache_key(Layer::Base, "a"), cache_key(Layer::Base, "a"));
        assert_ne!(cache_key(Layer::Base, "a"), cache_key(Layer::Base, "b"));
    }

    #[test]
    fn clear_evicts_everything() {
        let cache = ResultCache::new(&CacheConfig::default());
        cache.insert(Layer::Base, "x", positive());
        cache.clear();
        assert_eq!(cache.get(Layer::Base, "x"), None);
    }
}
