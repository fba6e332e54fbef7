//! Document Stores
//!
//! In-memory stores for the site's documents. Each store is a plain struct
//! mutated through `&mut self`; handlers share them as `Arc<RwLock<_>>`.

mod backgrounds;
mod chat_log;
mod menu;
pub mod seed;
mod workshops;

pub use backgrounds::BackgroundImageStore;
pub use chat_log::ChatLog;
pub use menu::MenuStore;
pub use seed::{seed_from_dir, SeedReport};
pub use workshops::WorkshopStore;
