//! Error types for the site service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Site Error Enum ==
/// Unified error type for the HTTP surface.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Requested document does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Write would violate a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A backing component is not available
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Missing or wrong admin credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SiteError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SiteError::Conflict(_) => StatusCode::CONFLICT,
            SiteError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            SiteError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            SiteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            SiteError::NotFound(msg)
            | SiteError::InvalidRequest(msg)
            | SiteError::Conflict(msg)
            | SiteError::Unavailable(msg)
            | SiteError::Unauthorized(msg)
            | SiteError::Internal(msg) => msg,
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Extractor Rejections ==
impl From<JsonRejection> for SiteError {
    fn from(rejection: JsonRejection) -> Self {
        SiteError::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for SiteError {
    fn from(rejection: PathRejection) -> Self {
        SiteError::InvalidRequest(rejection.body_text())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the site service.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(SiteError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(SiteError::InvalidRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(SiteError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            SiteError::Unavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(SiteError::Unauthorized("x".into()).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            SiteError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_uses_status() {
        let response = SiteError::NotFound("Drink not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_json_rejection_is_invalid_request() {
        use axum::{body::Body, extract::FromRequest, http::Request};

        let request = Request::builder().body(Body::from("{}")).unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let err = SiteError::from(rejection);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("Content-Type"));
    }
}
