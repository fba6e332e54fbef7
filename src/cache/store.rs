//! Cache Store Module
//!
//! Response cache keyed by request URL with TTL expiration and pattern clearing.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats, CachedResponse, MAX_KEY_LENGTH, MAX_VALUE_SIZE};
use crate::error::{Result, SiteError};

// == Response Cache ==
/// Process-wide store of response snapshots with TTL support.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Hit and miss counters
    stats: CacheStats,
    /// Default TTL in seconds for entries without explicit TTL
    default_ttl: u64,
    /// Bumped by every `delete` and `clear` that removes something
    generation: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            generation: 0,
        }
    }

    // == Set ==
    /// Stores a response under `key` with optional TTL.
    ///
    /// If the key already exists, the value is overwritten and TTL is reset.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The response to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: CachedResponse, ttl: Option<u64>) -> Result<()> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(SiteError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if value.size() > MAX_VALUE_SIZE {
            return Err(SiteError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                MAX_VALUE_SIZE
            )));
        }

        let effective_ttl = Some(ttl.unwrap_or(self.default_ttl));
        self.entries.insert(key, CacheEntry::new(value, effective_ttl));

        Ok(())
    }

    // == Get ==
    /// Retrieves a response by key.
    ///
    /// Expired entries are removed and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<CachedResponse> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.generation += 1;
        }
        removed
    }

    // == Keys ==
    /// Returns all stored keys, including ones not yet swept.
    pub fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    // == Clear ==
    /// Removes every key containing `pattern`, or everything when `pattern` is None.
    ///
    /// Returns the number of entries removed.
    /// Advances the generation even when nothing matched.
    pub fn clear(&mut self, pattern: Option<&str>) -> usize {
        self.generation += 1;
        match pattern {
            Some(pattern) => {
                let before = self.entries.len();
                self.entries.retain(|key, _| !key.contains(pattern));
                before - self.entries.len()
            }
            None => {
                let count = self.entries.len();
                self.entries.clear();
                count
            }
        }
    }

    // == Generation ==
    /// Invalidation counter. Callers read it before computing a response and
    /// compare before storing it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        let key_size = self.entries.keys().map(String::len).sum();
        let value_size = self.entries.values().map(|e| e.value.size()).sum();
        stats.set_totals(self.entries.len(), key_size, value_size);
        stats
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
