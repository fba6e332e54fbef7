//! Response DTOs for the site API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{BackgroundImage, GroupedMenu, MenuItem, Workshop};

/// Response body for GET /api/menu
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    /// Available items grouped by category and sub-category
    pub menu_items: GroupedMenu,
    /// Active background of the menu page, if any
    pub background_image: Option<BackgroundImage>,
}

/// Response body listing menu items (GET /api/admin/menu-items)
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemsResponse {
    pub success: bool,
    pub items: Vec<MenuItem>,
}

impl MenuItemsResponse {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            success: true,
            items,
        }
    }
}

/// Response body for a created or updated menu item
#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub success: bool,
    pub item: MenuItem,
}

impl MenuItemResponse {
    pub fn new(item: MenuItem) -> Self {
        Self {
            success: true,
            item,
        }
    }
}

/// Response body for DELETE operations
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

impl DeleteResponse {
    pub fn new(what: &str) -> Self {
        Self {
            success: true,
            message: format!("{} deleted successfully", what),
        }
    }
}

/// Response body for GET /api/workshops
#[derive(Debug, Clone, Serialize)]
pub struct WorkshopsResponse {
    pub workshops: Vec<Workshop>,
}

/// Response body for GET /api/backgrounds
#[derive(Debug, Clone, Serialize)]
pub struct BackgroundsResponse {
    pub backgrounds: Vec<BackgroundImage>,
}

/// Response body for the cache stats endpoint (GET /api/admin/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub keys: usize,
    pub key_size: usize,
    pub value_size: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            keys: stats.keys,
            key_size: stats.key_size,
            value_size: stats.value_size,
        }
    }
}

/// Response body for POST /api/admin/cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    pub message: String,
    /// Number of entries removed
    pub cleared: usize,
}

impl ClearCacheResponse {
    pub fn new(pattern: Option<&str>, cleared: usize) -> Self {
        let message = match pattern {
            Some(pattern) => format!("Cleared cache for pattern '{}'", pattern),
            None => "Cleared all cache".to_string(),
        };
        Self { message, cleared }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let mut stats = CacheStats::new();
        for _ in 0..4 {
            stats.record_hit();
        }
        stats.record_miss();
        let resp = CacheStatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
    }

    #[test]
    fn test_clear_cache_response_message() {
        assert!(ClearCacheResponse::new(Some("menu"), 3)
            .message
            .contains("'menu'"));
        assert_eq!(ClearCacheResponse::new(None, 0).message, "Cleared all cache");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_delete_response_message() {
        let resp = DeleteResponse::new("Item");
        assert_eq!(resp.message, "Item deleted successfully");
        assert!(resp.success);
    }
}
