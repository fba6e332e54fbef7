//! API Routes
//!
//! Configures the Axum router. Routes fall into four groups:
//! - pages, cached under `view:` keys for `VIEW_CACHE_TTL`
//! - public JSON reads, cached for `CACHE_TTL`
//! - uncached endpoints (`/health`, `/api/chat`)
//! - admin endpoints behind the bearer token guard

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    activate_background_handler, active_background_handler, analytics_handler,
    backgrounds_handler, cache_stats_handler, chat_handler, clear_cache_handler,
    create_background_handler, create_menu_item_handler, delete_background_handler,
    delete_menu_item_handler, health_handler, home_handler, list_menu_items_handler,
    menu_handler, recommend_handler, update_menu_item_handler, workshops_handler, AppState,
};
use crate::middleware::{cache_responses, require_admin, ResponseCacheLayer};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Response cache on the page and public JSON groups
/// - Admin guard on `/api/admin/*`
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let view_cache = ResponseCacheLayer::view(state.cache.clone(), state.view_cache_ttl);
    let json_cache = ResponseCacheLayer::json(state.cache.clone(), state.cache_ttl);

    let pages = Router::new()
        .route("/", get(home_handler))
        .route_layer(from_fn_with_state(view_cache, cache_responses));

    let public_api = Router::new()
        .route("/api/menu", get(menu_handler))
        .route("/api/workshops", get(workshops_handler))
        .route("/api/backgrounds", get(backgrounds_handler))
        .route("/api/backgrounds/:page/active", get(active_background_handler))
        .route("/api/recommend", get(recommend_handler))
        .route_layer(from_fn_with_state(json_cache, cache_responses));

    let admin_api = Router::new()
        .route(
            "/api/admin/menu-items",
            get(list_menu_items_handler).post(create_menu_item_handler),
        )
        .route(
            "/api/admin/menu-items/:id",
            put(update_menu_item_handler).delete(delete_menu_item_handler),
        )
        .route("/api/admin/backgrounds", post(create_background_handler))
        .route("/api/admin/backgrounds/:id", delete(delete_background_handler))
        .route(
            "/api/admin/backgrounds/:id/activate",
            post(activate_background_handler),
        )
        .route("/api/admin/analytics", get(analytics_handler))
        .route("/api/admin/cache/stats", get(cache_stats_handler))
        .route("/api/admin/cache/clear", post(clear_cache_handler))
        .route_layer(from_fn_with_state(state.admin_token.clone(), require_admin));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .merge(pages)
        .merge(public_api)
        .merge(admin_api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResponseCache;
    use crate::middleware::CACHE_STATUS_HEADER;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(ResponseCache::new(300));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(CACHE_STATUS_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_home_page_is_view_cached() {
        let state = AppState::new(ResponseCache::new(300));
        let app = create_router(state.clone());

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_STATUS_HEADER], "MISS");

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()[CACHE_STATUS_HEADER], "HIT");
        assert_eq!(state.cache.read().await.keys(), vec!["view:/".to_string()]);
    }

    #[tokio::test]
    async fn test_menu_endpoint_is_cached() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/api/menu").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_STATUS_HEADER], "MISS");
    }

    #[tokio::test]
    async fn test_admin_routes_are_not_cached() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/admin/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(CACHE_STATUS_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/api/nothing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
