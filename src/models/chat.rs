//! Chat exchange documents and the chat endpoint DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default value of [`ChatMessage::source`].
pub const DEFAULT_CHAT_SOURCE: &str = "gemini";

/// A logged chat exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub session_id: String,
    pub user_message: String,
    pub ai_reply: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/chat
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatRequest {
    /// The message, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Response body for POST /api/chat
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}
