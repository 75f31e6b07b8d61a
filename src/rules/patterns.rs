//! Compiled-pattern caching for the dynamic `regex` rule.
//!
//! Fixed rules compile their patterns once into statics; the `regex` rule
//! takes its pattern from the rule string at runtime, so repeated
//! validation of the same rule set would otherwise recompile on every
//! record. Compilation failures are cached too, so a bad pattern fails
//! fast instead of re-erroring through the compiler each time.

use lru::LruCache;
use parking_lot::Mutex;
use regex::Regex;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Default number of distinct patterns kept compiled.
pub const DEFAULT_PATTERN_CAPACITY: usize = 64;

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct PatternStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (pattern compiled on demand).
    pub misses: u64,
    /// Number of patterns that failed to compile.
    pub compile_failures: u64,
}

impl PatternStats {
    /// Calculate hit ratio.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}

/// Thread-safe LRU cache of compiled patterns.
///
/// Failed compilations occupy a slot as `None`, which keeps their cost to
/// one compiler pass per pattern rather than one per record.
pub struct PatternCache {
    cache: Mutex<LruCache<String, Option<Regex>>>,
    stats: Mutex<PatternStats>,
}

impl PatternCache {
    /// Create a new cache with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity)
                    .unwrap_or(NonZeroUsize::new(DEFAULT_PATTERN_CAPACITY).unwrap()),
            )),
            stats: Mutex::new(PatternStats::default()),
        }
    }

    /// Fetch the compiled form of `pattern`, compiling on first sight.
    ///
    /// Returns `None` for patterns that do not compile.
    pub fn get(&self, pattern: &str) -> Option<Regex> {
        {
            let mut cache = self.cache.lock();
            if let Some(entry) = cache.get(pattern) {
                self.stats.lock().hits += 1;
                return entry.clone();
            }
        }

        let compiled = match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                log::warn!("pattern '{}' failed to compile: {}", pattern, err);
                self.stats.lock().compile_failures += 1;
                None
            }
        };

        let mut cache = self.cache.lock();
        cache.put(pattern.to_string(), compiled.clone());
        self.stats.lock().misses += 1;
        compiled
    }

    /// Match `text` against `pattern`, treating uncompilable patterns as
    /// non-matching.
    pub fn matches(&self, pattern: &str, text: &str) -> bool {
        match self.get(pattern) {
            Some(re) => re.is_match(text),
            None => false,
        }
    }

    /// Get cache statistics.
    pub fn stats(&self) -> PatternStats {
        self.stats.lock().clone()
    }

    /// Get number of cached patterns.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the cache.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN_CAPACITY)
    }
}

/// A shared pattern cache wrapped in Arc.
pub type SharedPatterns = Arc<PatternCache>;

/// Create a new shared pattern cache.
pub fn new_shared_patterns(capacity: usize) -> SharedPatterns {
    Arc::new(PatternCache::new(capacity))
}
