//! Cache Statistics Module
//!
//! Tracks cache hits and misses along with key and payload sizes.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Current number of keys in the cache
    pub keys: usize,
    /// Total size of all keys in bytes
    pub key_size: usize,
    /// Total size of all cached bodies in bytes
    pub value_size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Update Totals ==
    /// Updates the key count and size totals.
    pub fn set_totals(&mut self, keys: usize, key_size: usize, value_size: usize) {
        self.keys = keys;
        self.key_size = key_size;
        self.value_size = value_size;
    }
}
