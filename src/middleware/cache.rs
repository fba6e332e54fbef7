//! Response Caching Middleware
//!
//! Serves GET responses from the shared [`ResponseCache`] and snapshots
//! successful responses on a miss. Other methods pass straight through.
//!
//! A snapshot keeps the status, content type and body; other headers set by
//! the handler are not replayed on a hit.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{OriginalUri, Request, State},
    http::{header, HeaderValue, Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CachedResponse, ResponseCache, VIEW_KEY_PREFIX};
use crate::error::SiteError;

/// Response header reporting whether the payload came from the cache.
pub const CACHE_STATUS_HEADER: &str = "x-cache";

// == Layer State ==
/// Cache policy for a group of routes: where to store, for how long, and
/// under which key prefix.
#[derive(Clone)]
pub struct ResponseCacheLayer {
    cache: Arc<RwLock<ResponseCache>>,
    ttl: u64,
    prefix: &'static str,
}

impl ResponseCacheLayer {
    /// Policy for JSON endpoints, keyed by the bare request URL.
    pub fn json(cache: Arc<RwLock<ResponseCache>>, ttl: u64) -> Self {
        Self {
            cache,
            ttl,
            prefix: "",
        }
    }

    /// Policy for pages, keyed by `view:` plus the request URL.
    pub fn view(cache: Arc<RwLock<ResponseCache>>, ttl: u64) -> Self {
        Self {
            cache,
            ttl,
            prefix: VIEW_KEY_PREFIX,
        }
    }

    /// Derives the cache key for a request URL (path and query).
    pub fn key_for(&self, uri: &Uri) -> String {
        let path = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path());
        format!("{}{}", self.prefix, path)
    }
}

// == Middleware ==
/// Axum middleware applying a [`ResponseCacheLayer`].
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn cache_responses(
    State(layer): State<ResponseCacheLayer>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let key = {
        let uri = request
            .extensions()
            .get::<OriginalUri>()
            .map(|original| &original.0)
            .unwrap_or_else(|| request.uri());
        layer.key_for(uri)
    };

    let (hit, generation) = {
        let mut cache = layer.cache.write().await;
        (cache.get(&key), cache.generation())
    };
    if let Some(cached) = hit {
        debug!(key = %key, "Cache hit");
        return replay(cached);
    }

    let response = next.run(request).await;
    if !response.status().is_success() {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "Failed to buffer response body");
            return SiteError::Internal("Failed to read response body".to_string()).into_response();
        }
    };

    let snapshot = CachedResponse::new(parts.headers.get(header::CONTENT_TYPE).cloned(), bytes.clone())
        .with_status(parts.status);
    {
        let mut cache = layer.cache.write().await;
        if cache.generation() != generation {
            debug!(key = %key, "Cache invalidated while handling, response not stored");
        } else {
            match cache.set(key.clone(), snapshot, Some(layer.ttl)) {
                Ok(()) => debug!(key = %key, ttl = layer.ttl, "Cache set"),
                Err(err) => warn!(key = %key, error = %err, "Response not cached"),
            }
        }
    }

    parts
        .headers
        .insert(CACHE_STATUS_HEADER, HeaderValue::from_static("MISS"));
    Response::from_parts(parts, Body::from(bytes))
}

fn replay(cached: CachedResponse) -> Response {
    let mut response = Response::new(Body::from(cached.body));
    *response.status_mut() = cached.status;
    let headers = response.headers_mut();
    if let Some(content_type) = cached.content_type {
        headers.insert(header::CONTENT_TYPE, content_type);
    }
    headers.insert(CACHE_STATUS_HEADER, HeaderValue::from_static("HIT"));
    response
}
