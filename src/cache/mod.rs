//! Cache Module
//!
//! Provides the in-memory response cache with TTL expiration.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry, CachedResponse};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 2048;

/// Maximum allowed cached body size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

/// Key prefix separating cached pages from JSON responses
pub const VIEW_KEY_PREFIX: &str = "view:";
