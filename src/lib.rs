//! Rabuste Site - Coffee franchise site service
//!
//! Serves the menu, workshops and background images through a TTL response
//! cache, proxies the barista chat and answers drink recommendations.

pub mod api;
pub mod cache;
pub mod chat;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod recommend;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
