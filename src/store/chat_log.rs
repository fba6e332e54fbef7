//! Chat Log
//!
//! Records chat exchanges for later review.

use chrono::Utc;

use crate::error::{Result, SiteError};
use crate::models::{ChatMessage, DEFAULT_CHAT_SOURCE};

#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an exchange. Both sides are trimmed and must be non-empty.
    pub fn record(&mut self, session_id: &str, user_message: &str, ai_reply: &str) -> Result<ChatMessage> {
        let session_id = session_id.trim();
        let user_message = user_message.trim();
        let ai_reply = ai_reply.trim();

        if session_id.is_empty() {
            return Err(SiteError::InvalidRequest("Session id is required".to_string()));
        }
        if user_message.is_empty() || ai_reply.is_empty() {
            return Err(SiteError::InvalidRequest(
                "Chat message and reply are required".to_string(),
            ));
        }

        self.next_id += 1;
        let message = ChatMessage {
            id: self.next_id,
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            ai_reply: ai_reply.to_string(),
            source: DEFAULT_CHAT_SOURCE.to_string(),
            created_at: Utc::now(),
        };
        self.messages.push(message.clone());
        Ok(message)
    }

    /// The most recent `limit` exchanges, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ChatMessage> {
        self.messages.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
