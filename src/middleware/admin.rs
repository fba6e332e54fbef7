//! Admin Guard Middleware
//!
//! Requires `Authorization: Bearer <token>` on admin routes when a token is
//! configured.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::error::SiteError;

/// Admin bearer token; `None` leaves admin routes open.
#[derive(Clone, Debug, Default)]
pub struct AdminToken(pub Option<Arc<str>>);

impl AdminToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token.map(Arc::from))
    }

    /// Checks an `Authorization` header value against the token.
    pub fn allows(&self, authorization: Option<&str>) -> bool {
        match &self.0 {
            None => true,
            Some(expected) => authorization
                .and_then(|value| value.strip_prefix("Bearer "))
                .map(|provided| provided.trim() == expected.as_ref())
                .unwrap_or(false),
        }
    }
}

/// Rejects admin requests without the configured bearer token.
pub async fn require_admin(
    State(token): State<AdminToken>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if !token.allows(authorization) {
        warn!(path = %request.uri().path(), "Rejected admin request");
        return SiteError::Unauthorized("Admin access required".to_string()).into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_when_unset() {
        let token = AdminToken::new(None);
        assert!(token.allows(None));
        assert!(token.allows(Some("Bearer anything")));
    }

    #[test]
    fn test_requires_matching_bearer() {
        let token = AdminToken::new(Some("s3cret".to_string()));
        assert!(token.allows(Some("Bearer s3cret")));
        assert!(!token.allows(Some("Bearer wrong")));
        assert!(!token.allows(Some("s3cret")));
        assert!(!token.allows(None));
    }
}
