//! Request DTOs for the site API
//!
//! Query strings and bodies that are not documents themselves.

use serde::Deserialize;

/// Request body for POST /api/admin/cache/clear
///
/// A missing or empty pattern flushes the whole cache.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearCacheRequest {
    #[serde(default)]
    pub pattern: Option<String>,
}

impl ClearCacheRequest {
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// Query for GET /api/recommend
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub drink: Option<String>,
}

/// Query for GET /api/workshops
#[derive(Debug, Clone, Deserialize)]
pub struct WorkshopQuery {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Query for GET /api/backgrounds
#[derive(Debug, Clone, Deserialize)]
pub struct BackgroundQuery {
    #[serde(default)]
    pub page: Option<String>,
}
