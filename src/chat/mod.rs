//! Barista Chat
//!
//! Answers visitor questions by prompting a language model with the live
//! menu and workshop catalogue. The service never fails outward: any model
//! error turns into a fixed fallback reply.

mod error;
pub mod gemini;
pub mod prompt;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::store::{MenuStore, WorkshopStore};

pub use error::ChatError;
pub use gemini::{GeminiClient, GeminiConfig};

/// Reply sent whenever the model cannot be reached.
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting to my AI brain right now. Please try again in a moment, or feel free to browse our menu and workshops! ☕";

/// Menu items included in the prompt, by display order.
pub const MENU_CONTEXT_LIMIT: usize = 40;
/// Active workshops included in the prompt, by date.
pub const WORKSHOP_CONTEXT_LIMIT: usize = 15;

/// A text generation backend.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ChatError>;
}

pub struct ChatService {
    model: Option<Arc<dyn ChatModel>>,
    menu: Arc<RwLock<MenuStore>>,
    workshops: Arc<RwLock<WorkshopStore>>,
    error_logged: AtomicBool,
}

impl ChatService {
    pub fn new(
        model: Option<Arc<dyn ChatModel>>,
        menu: Arc<RwLock<MenuStore>>,
        workshops: Arc<RwLock<WorkshopStore>>,
    ) -> Self {
        Self {
            model,
            menu,
            workshops,
            error_logged: AtomicBool::new(false),
        }
    }

    /// Returns a copy of this service using `model`.
    pub fn with_model(&self, model: Arc<dyn ChatModel>) -> Self {
        Self::new(Some(model), self.menu.clone(), self.workshops.clone())
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Assembles the full prompt for `question` from the current stores.
    pub async fn build_prompt(&self, question: &str) -> String {
        let menu = {
            let menu = self.menu.read().await;
            prompt::menu_context(&menu.available_by_display_order(MENU_CONTEXT_LIMIT))
        };
        let workshops = {
            let workshops = self.workshops.read().await;
            prompt::workshop_context(&workshops.active_by_date(WORKSHOP_CONTEXT_LIMIT))
        };
        prompt::build_prompt(&menu, &workshops, question)
    }

    /// Answers `question`, falling back to [`FALLBACK_REPLY`] on any failure.
    pub async fn ask(&self, question: &str) -> String {
        let Some(model) = &self.model else {
            self.log_failure_once(&ChatError::MissingApiKey);
            return FALLBACK_REPLY.to_string();
        };

        let prompt = self.build_prompt(question).await;
        match model.generate(&prompt).await {
            Ok(reply) => reply,
            Err(err) => {
                self.log_failure_once(&err);
                FALLBACK_REPLY.to_string()
            }
        }
    }

    fn log_failure_once(&self, err: &ChatError) {
        if self.error_logged.swap(true, Ordering::Relaxed) {
            debug!(error = %err, "Chat model unavailable");
        } else {
            warn!(error = %err, "Chat model unavailable, replying with fallback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MenuItemInput, SubCategory};
    use std::sync::Mutex;

    struct EchoModel {
        last_prompt: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ChatModel for EchoModel {
        async fn generate(&self, prompt: &str) -> Result<String, ChatError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok("Try our Robusta Cold Brew!".to_string())
        }
    }

    struct DownModel;

    #[async_trait]
    impl ChatModel for DownModel {
        async fn generate(&self, _prompt: &str) -> Result<String, ChatError> {
            Err(ChatError::HttpError { status: 503 })
        }
    }

    fn stores() -> (Arc<RwLock<MenuStore>>, Arc<RwLock<WorkshopStore>>) {
        let mut menu = MenuStore::new();
        menu.create(MenuItemInput {
            name: "Robusta Cold Brew".to_string(),
            description: "Steeped 18 hours".to_string(),
            price: 180.0,
            category: Category::ManualBrew,
            sub_category: SubCategory::ColdBrew,
            image: String::new(),
            is_available: None,
            display_order: 1,
            reviews: Vec::new(),
        })
        .unwrap();
        (
            Arc::new(RwLock::new(menu)),
            Arc::new(RwLock::new(WorkshopStore::new())),
        )
    }

    #[tokio::test]
    async fn test_ask_uses_model_reply() {
        let (menu, workshops) = stores();
        let model = Arc::new(EchoModel {
            last_prompt: Mutex::new(None),
        });
        let service = ChatService::new(Some(model.clone()), menu, workshops);

        let reply = service.ask("What's cold today?").await;
        assert_eq!(reply, "Try our Robusta Cold Brew!");

        let prompt = model.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("- Robusta Cold Brew (manual-brew, cold-brew) – ₹180: Steeped 18 hours"));
        assert!(prompt.contains(prompt::EMPTY_WORKSHOP_CONTEXT));
        assert!(prompt.ends_with("User Question: What's cold today?"));
    }

    #[tokio::test]
    async fn test_ask_falls_back_on_error() {
        let (menu, workshops) = stores();
        let service = ChatService::new(Some(Arc::new(DownModel)), menu, workshops);

        assert_eq!(service.ask("hello").await, FALLBACK_REPLY);
        assert_eq!(service.ask("hello again").await, FALLBACK_REPLY);
        assert!(service.error_logged.load(Ordering::Relaxed));
    }

    #[tokio::test]
    async fn test_ask_without_model() {
        let (menu, workshops) = stores();
        let service = ChatService::new(None, menu, workshops);
        assert!(!service.has_model());
        assert_eq!(service.ask("hello").await, FALLBACK_REPLY);

        let swapped = service.with_model(Arc::new(DownModel));
        assert!(swapped.has_model());
    }
}
