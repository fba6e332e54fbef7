//! Chat API client error types.

use std::sync::Arc;

/// Errors from the chat model client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChatError {
    /// No API key configured.
    #[error("missing API key: GEMINI_API_KEY not set")]
    MissingApiKey,

    /// Non-success HTTP status from the API.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model answered without any text.
    #[error("empty reply from model")]
    EmptyReply,
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ChatError::Timeout
        } else {
            ChatError::Network(Arc::new(err))
        }
    }
}
