//! Admin analytics report.
//!
//! Site traffic comes from a fixed mock profile; live reporting from an
//! analytics provider is not wired in. The totals are counted from the
//! stores at request time.

use serde::Serialize;

/// Label of the traffic figures in [`AnalyticsResponse::source`].
pub const MOCK_SOURCE: &str = "mock";
/// Reporting window of the traffic figures.
pub const ANALYTICS_PERIOD: &str = "last30days";

/// Visitor metrics over [`ANALYTICS_PERIOD`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficMetrics {
    pub active_users: u64,
    pub sessions: u64,
    pub page_views: u64,
    /// Fraction of single-page sessions, 0.0 to 1.0
    pub bounce_rate: f64,
    /// Seconds
    pub average_session_duration: f64,
}

impl TrafficMetrics {
    /// Figures reported while no analytics provider is configured.
    pub fn mock() -> Self {
        Self {
            active_users: 1_250,
            sessions: 1_870,
            page_views: 5_430,
            bounce_rate: 0.42,
            average_session_duration: 154.0,
        }
    }
}

/// Document counts across the stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteTotals {
    pub menu_items: usize,
    pub available_menu_items: usize,
    pub workshops: usize,
    pub background_images: usize,
    pub active_backgrounds: usize,
    pub chat_messages: usize,
    pub cached_responses: usize,
}

/// Response body for GET /api/admin/analytics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub source: String,
    pub period: String,
    pub traffic: TrafficMetrics,
    pub totals: SiteTotals,
    pub generated_at: String,
}

impl AnalyticsResponse {
    /// Report with mock traffic and the given totals.
    pub fn mock(totals: SiteTotals) -> Self {
        Self {
            source: MOCK_SOURCE.to_string(),
            period: ANALYTICS_PERIOD.to_string(),
            traffic: TrafficMetrics::mock(),
            totals,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
