//! API Handlers
//!
//! HTTP request handlers for the public site API and the admin API.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    Json,
};
use tracing::{debug, info, warn};

use super::extract::{ApiJson, ApiPath};
use crate::cache::{ResponseCache, VIEW_KEY_PREFIX};
use crate::chat::{ChatModel, ChatService, GeminiClient, GeminiConfig};
use crate::config::Config;
use crate::error::{Result, SiteError};
use crate::middleware::AdminToken;
use crate::models::{
    AnalyticsResponse, BackgroundImage, BackgroundQuery, BackgroundsResponse, CacheStatsResponse, ChatRequest,
    ChatResponse, ClearCacheRequest, ClearCacheResponse, DeleteResponse, HealthResponse,
    MenuItemInput, MenuItemResponse, MenuItemsResponse, MenuResponse, NewBackgroundImage,
    RecommendQuery, SitePage, SiteTotals, WorkshopQuery, WorkshopType, WorkshopsResponse,
};
use crate::recommend::{Dataset, Recommendation, Recommender};
use crate::store::{seed_from_dir, BackgroundImageStore, ChatLog, MenuStore, WorkshopStore};

/// Cache key prefix of the menu endpoint.
pub const MENU_CACHE_KEY: &str = "/api/menu";
/// Cache key prefix of the background endpoints.
pub const BACKGROUNDS_CACHE_KEY: &str = "/api/backgrounds";
/// Header carrying the visitor's chat session id.
pub const SESSION_HEADER: &str = "x-session-id";

const ANONYMOUS_SESSION: &str = "anonymous";

/// Application state shared across all handlers.
///
/// Every store sits behind its own `Arc<RwLock<_>>`; cloning the state
/// clones the handles, not the data.
#[derive(Clone)]
pub struct AppState {
    /// Shared response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    pub menu: Arc<RwLock<MenuStore>>,
    pub workshops: Arc<RwLock<WorkshopStore>>,
    pub backgrounds: Arc<RwLock<BackgroundImageStore>>,
    pub chat_log: Arc<RwLock<ChatLog>>,
    pub chat: Arc<ChatService>,
    /// `None` when the datasets could not be loaded
    pub recommender: Option<Arc<Recommender>>,
    /// TTL in seconds for cached JSON responses
    pub cache_ttl: u64,
    /// TTL in seconds for cached pages
    pub view_cache_ttl: u64,
    pub admin_token: AdminToken,
}

impl AppState {
    /// Creates a state with empty stores, no chat model and no recommender.
    pub fn new(cache: ResponseCache) -> Self {
        Self::with_stores(cache, MenuStore::new(), WorkshopStore::new())
    }

    pub fn with_stores(cache: ResponseCache, menu: MenuStore, workshops: WorkshopStore) -> Self {
        let defaults = Config::default();
        let menu = Arc::new(RwLock::new(menu));
        let workshops = Arc::new(RwLock::new(workshops));
        let chat = Arc::new(ChatService::new(None, menu.clone(), workshops.clone()));

        Self {
            cache: Arc::new(RwLock::new(cache)),
            menu,
            workshops,
            backgrounds: Arc::new(RwLock::new(BackgroundImageStore::new())),
            chat_log: Arc::new(RwLock::new(ChatLog::new())),
            chat,
            recommender: None,
            cache_ttl: defaults.cache_ttl,
            view_cache_ttl: defaults.view_cache_ttl,
            admin_token: AdminToken::default(),
        }
    }

    /// Creates the state from configuration.
    ///
    /// Seeds the stores, connects the chat model when a key is configured
    /// and loads the recommender datasets. Failures in the optional parts
    /// are logged and leave that feature degraded.
    pub fn from_config(config: &Config) -> Self {
        let mut menu = MenuStore::new();
        let mut workshops = WorkshopStore::new();
        seed_from_dir(&config.seed_dir, &mut menu, &mut workshops);

        let mut state = Self::with_stores(ResponseCache::new(config.cache_ttl), menu, workshops)
            .with_admin_token(config.admin_token.clone());
        state.cache_ttl = config.cache_ttl;
        state.view_cache_ttl = config.view_cache_ttl;

        match GeminiConfig::from_config(config).and_then(GeminiClient::new) {
            Ok(client) => {
                info!(model = %config.gemini_model, "Chat model configured");
                state = state.with_chat_model(Arc::new(client));
            }
            Err(err) => warn!(error = %err, "Chat model disabled, replies will use the fallback"),
        }

        match Dataset::load(&config.data_dir) {
            Ok(dataset) => {
                info!(drinks = dataset.drinks.len(), "Recommender datasets loaded");
                state = state.with_recommender(Recommender::new(dataset));
            }
            Err(err) => warn!(error = ?err, "Recommender disabled"),
        }

        state
    }

    pub fn with_chat_model(mut self, model: Arc<dyn ChatModel>) -> Self {
        self.chat = Arc::new(self.chat.with_model(model));
        self
    }

    pub fn with_recommender(mut self, recommender: Recommender) -> Self {
        self.recommender = Some(Arc::new(recommender));
        self
    }

    pub fn with_admin_token(mut self, token: Option<String>) -> Self {
        self.admin_token = AdminToken::new(token);
        self
    }

    /// Drops every cached response whose key contains one of `patterns`.
    async fn invalidate(&self, patterns: &[&str]) {
        let mut cache = self.cache.write().await;
        for pattern in patterns {
            let cleared = cache.clear(Some(*pattern));
            debug!(pattern = %pattern, cleared, "Cache invalidated");
        }
    }

    /// Invalidates the background listings and the page showing `page`'s image.
    async fn invalidate_backgrounds(&self, page: SitePage) {
        let home_view = format!("{}/", VIEW_KEY_PREFIX);
        match page {
            SitePage::Menu => self.invalidate(&[BACKGROUNDS_CACHE_KEY, MENU_CACHE_KEY]).await,
            SitePage::Home => self.invalidate(&[BACKGROUNDS_CACHE_KEY, home_view.as_str()]).await,
            _ => self.invalidate(&[BACKGROUNDS_CACHE_KEY]).await,
        }
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// == Public Handlers ==

/// Handler for GET /
///
/// Minimal landing page carrying the active home background.
pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    let background = state.backgrounds.read().await.active_for(SitePage::Home);
    let style = background
        .map(|bg| format!(" style=\"background-image: url('{}')\"", escape_html(&bg.image_url)))
        .unwrap_or_default();

    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Rabuste Coffee</title></head>\n<body{}>\n<h1>Rabuste Coffee</h1>\n<p>Robusta-only specialty coffee, art and workshops.</p>\n</body>\n</html>\n",
        style
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /api/menu
///
/// Available items grouped by category and sub-category, plus the active
/// menu background.
pub async fn menu_handler(State(state): State<AppState>) -> Json<MenuResponse> {
    let menu_items = state.menu.read().await.grouped();
    let background_image = state.backgrounds.read().await.active_for(SitePage::Menu);

    Json(MenuResponse {
        menu_items,
        background_image,
    })
}

/// Handler for GET /api/workshops?type=
pub async fn workshops_handler(
    State(state): State<AppState>,
    Query(query): Query<WorkshopQuery>,
) -> Result<Json<WorkshopsResponse>> {
    let kind = query
        .kind
        .as_deref()
        .filter(|k| !k.is_empty())
        .map(str::parse::<WorkshopType>)
        .transpose()
        .map_err(SiteError::InvalidRequest)?;

    let workshops = state.workshops.read().await.list(kind);
    Ok(Json(WorkshopsResponse { workshops }))
}

/// Handler for GET /api/backgrounds?page=
pub async fn backgrounds_handler(
    State(state): State<AppState>,
    Query(query): Query<BackgroundQuery>,
) -> Result<Json<BackgroundsResponse>> {
    let page = query
        .page
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(str::parse::<SitePage>)
        .transpose()
        .map_err(SiteError::InvalidRequest)?;

    let backgrounds = state.backgrounds.read().await.list(page);
    Ok(Json(BackgroundsResponse { backgrounds }))
}

/// Handler for GET /api/backgrounds/:page/active
pub async fn active_background_handler(
    State(state): State<AppState>,
    ApiPath(page): ApiPath<String>,
) -> Result<Json<BackgroundImage>> {
    let page: SitePage = page.parse().map_err(SiteError::InvalidRequest)?;

    state
        .backgrounds
        .read()
        .await
        .active_for(page)
        .map(Json)
        .ok_or_else(|| SiteError::NotFound(format!("No active background for page '{}'", page)))
}

/// Handler for GET /api/recommend?drink=
pub async fn recommend_handler(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Recommendation>> {
    let drink = query
        .drink
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| SiteError::InvalidRequest("drink query param required".to_string()))?;

    let recommender = state
        .recommender
        .as_ref()
        .ok_or_else(|| SiteError::Unavailable("Recommender unavailable".to_string()))?;

    Ok(Json(recommender.recommend(drink)?))
}

/// Handler for POST /api/chat
///
/// Always answers with a reply once the message is valid; the exchange is
/// logged on a best-effort basis. A body without a JSON content type, or
/// whose `message` is not a string, counts as a missing message.
pub async fn chat_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(JsonRejection::MissingJsonContentType(_)) | Err(JsonRejection::JsonDataError(_)) => {
            ChatRequest::default()
        }
        Err(rejection) => return Err(rejection.into()),
    };
    let message = req
        .message()
        .ok_or_else(|| SiteError::InvalidRequest("Message required".to_string()))?;

    let reply = state.chat.ask(message).await;

    let session = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(ANONYMOUS_SESSION);
    if let Err(err) = state.chat_log.write().await.record(session, message, &reply) {
        warn!(error = %err, "Chat exchange not logged");
    }

    Ok(Json(ChatResponse { reply }))
}

// == Admin Handlers ==

/// Handler for GET /api/admin/menu-items
pub async fn list_menu_items_handler(State(state): State<AppState>) -> Json<MenuItemsResponse> {
    Json(MenuItemsResponse::new(state.menu.read().await.all()))
}

/// Handler for POST /api/admin/menu-items
pub async fn create_menu_item_handler(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MenuItemInput>,
) -> Result<(StatusCode, Json<MenuItemResponse>)> {
    let item = state.menu.write().await.create(input)?;
    info!(id = item.id, name = %item.name, "Menu item created");
    state.invalidate(&[MENU_CACHE_KEY]).await;

    Ok((StatusCode::CREATED, Json(MenuItemResponse::new(item))))
}

/// Handler for PUT /api/admin/menu-items/:id
pub async fn update_menu_item_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(input): ApiJson<MenuItemInput>,
) -> Result<Json<MenuItemResponse>> {
    let item = state.menu.write().await.update(id, input)?;
    info!(id, "Menu item updated");
    state.invalidate(&[MENU_CACHE_KEY]).await;

    Ok(Json(MenuItemResponse::new(item)))
}

/// Handler for DELETE /api/admin/menu-items/:id
pub async fn delete_menu_item_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<DeleteResponse>> {
    state.menu.write().await.delete(id)?;
    info!(id, "Menu item deleted");
    state.invalidate(&[MENU_CACHE_KEY]).await;

    Ok(Json(DeleteResponse::new("Menu item")))
}

/// Handler for POST /api/admin/backgrounds
pub async fn create_background_handler(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewBackgroundImage>,
) -> Result<(StatusCode, Json<BackgroundImage>)> {
    let image = state.backgrounds.write().await.create(input)?;
    info!(id = image.id, page = %image.page, active = image.is_active, "Background image created");
    state.invalidate_backgrounds(image.page).await;

    Ok((StatusCode::CREATED, Json(image)))
}

/// Handler for POST /api/admin/backgrounds/:id/activate
pub async fn activate_background_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<BackgroundImage>> {
    let image = state.backgrounds.write().await.set_active(id, true)?;
    info!(id, page = %image.page, "Background image activated");
    state.invalidate_backgrounds(image.page).await;

    Ok(Json(image))
}

/// Handler for DELETE /api/admin/backgrounds/:id
pub async fn delete_background_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> Result<Json<DeleteResponse>> {
    let image = state.backgrounds.write().await.delete(id)?;
    info!(id, page = %image.page, "Background image deleted");
    state.invalidate_backgrounds(image.page).await;

    Ok(Json(DeleteResponse::new("Background image")))
}

/// Handler for GET /api/admin/analytics
///
/// Mock traffic figures alongside live store totals.
pub async fn analytics_handler(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let (menu_items, available_menu_items) = {
        let menu = state.menu.read().await;
        (menu.len(), menu.available().len())
    };
    let (background_images, active_backgrounds) = {
        let backgrounds = state.backgrounds.read().await;
        let active = backgrounds.list(None).iter().filter(|bg| bg.is_active).count();
        (backgrounds.len(), active)
    };

    let totals = SiteTotals {
        menu_items,
        available_menu_items,
        workshops: state.workshops.read().await.len(),
        background_images,
        active_backgrounds,
        chat_messages: state.chat_log.read().await.len(),
        cached_responses: state.cache.read().await.len(),
    };
    debug!(?totals, "Analytics report built");

    Json(AnalyticsResponse::mock(totals))
}

/// Handler for GET /api/admin/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(CacheStatsResponse::from(stats))
}

/// Handler for POST /api/admin/cache/clear
///
/// A body without a pattern, or no body at all, flushes everything.
pub async fn clear_cache_handler(
    State(state): State<AppState>,
    body: Option<Json<ClearCacheRequest>>,
) -> Json<ClearCacheResponse> {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let pattern = req.pattern();

    let cleared = state.cache.write().await.clear(pattern);
    info!(pattern = pattern.unwrap_or("*"), cleared, "Cache cleared");

    Json(ClearCacheResponse::new(pattern, cleared))
}
