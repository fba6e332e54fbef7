//! API Module
//!
//! HTTP handlers and routing for the site service.
//!
//! # Endpoints
//! - `GET /` - Landing page (view cache)
//! - `GET /health` - Health check
//! - `GET /api/menu`, `/api/workshops`, `/api/backgrounds`,
//!   `/api/backgrounds/:page/active`, `/api/recommend` - Public reads (JSON cache)
//! - `POST /api/chat` - Barista chat
//! - `/api/admin/*` - Menu, background and cache administration, analytics

pub mod extract;
pub mod handlers;
pub mod routes;

pub use extract::{ApiJson, ApiPath};
pub use handlers::*;
pub use routes::create_router;
