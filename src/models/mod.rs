//! Documents and DTOs for the site API
//!
//! Document types mirror what the stores persist; request and response
//! types shape the HTTP bodies around them.

pub mod analytics;
pub mod background;
pub mod chat;
pub mod menu;
pub mod requests;
pub mod responses;
pub mod workshop;

// Re-export commonly used types
pub use analytics::{AnalyticsResponse, SiteTotals, TrafficMetrics};
pub use background::{BackgroundImage, NewBackgroundImage, SitePage};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, DEFAULT_CHAT_SOURCE};
pub use menu::{Category, GroupedMenu, MenuItem, MenuItemInput, Review, SubCategory};
pub use requests::{BackgroundQuery, ClearCacheRequest, RecommendQuery, WorkshopQuery};
pub use responses::{
    BackgroundsResponse, CacheStatsResponse, ClearCacheResponse, DeleteResponse, HealthResponse,
    MenuItemResponse, MenuItemsResponse, MenuResponse, WorkshopsResponse,
};
pub use workshop::{Workshop, WorkshopInput, WorkshopMeta, WorkshopType};
