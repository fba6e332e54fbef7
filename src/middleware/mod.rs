//! HTTP middleware: response caching and the admin guard.

pub mod admin;
pub mod cache;

pub use admin::{require_admin, AdminToken};
pub use cache::{cache_responses, ResponseCacheLayer, CACHE_STATUS_HEADER};
