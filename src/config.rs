//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Default chat model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the generative language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached JSON responses
    pub cache_ttl: u64,
    /// TTL in seconds for cached pages
    pub view_cache_ttl: u64,
    /// Expiry sweep interval in seconds
    pub cleanup_interval: u64,
    /// Directory holding the recommender CSV files
    pub data_dir: PathBuf,
    /// Directory holding the JSON seed documents
    pub seed_dir: PathBuf,
    /// Chat API key; chat falls back to a canned reply when absent
    pub gemini_api_key: Option<String>,
    /// Chat model name
    pub gemini_model: String,
    /// Chat API base URL
    pub gemini_base_url: String,
    /// Bearer token guarding admin routes; admin routes are open when absent
    pub admin_token: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_TTL` - JSON response TTL in seconds (default: 300)
    /// - `VIEW_CACHE_TTL` - Page TTL in seconds (default: 600)
    /// - `CACHE_CHECK_PERIOD` - Sweep frequency in seconds (default: 120)
    /// - `DATA_DIR` - Recommender datasets (default: data)
    /// - `SEED_DIR` - Seed documents (default: seed)
    /// - `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL` - Chat API
    /// - `ADMIN_TOKEN` - Admin bearer token
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: parse_or("SERVER_PORT", defaults.server_port),
            cache_ttl: parse_or("CACHE_TTL", defaults.cache_ttl),
            view_cache_ttl: parse_or("VIEW_CACHE_TTL", defaults.view_cache_ttl),
            cleanup_interval: parse_or("CACHE_CHECK_PERIOD", defaults.cleanup_interval),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            seed_dir: env::var("SEED_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.seed_dir),
            gemini_api_key: non_empty("GEMINI_API_KEY"),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: non_empty("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            admin_token: non_empty("ADMIN_TOKEN"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_ttl: 300,
            view_cache_ttl: 600,
            cleanup_interval: 120,
            data_dir: PathBuf::from("data"),
            seed_dir: PathBuf::from("seed"),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            admin_token: None,
        }
    }
}

fn parse_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
