//! Message dispatcher - Routes messages to responders

use std::sync::Arc;
use crate::domain::entities::Message;
use crate::domain::traits::Responder;
use crate::application::errors::BotError;

/// Dispatch result: `None` when no command matched
pub type DispatchResult = Result<Option<Message>, BotError>;

/// Message dispatcher - runs the first responder whose signature matches
#[derive(Clone, Default)]
pub struct MessageDispatcher {
    responders: Vec<Arc<dyn Responder>>,
}

impl MessageDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a responder after the ones already registered
    pub fn with_responder<R: Responder + 'static>(mut self, responder: R) -> Self {
        self.responders.push(Arc::new(responder));
        self
    }

    /// Register a responder after the ones already registered
    pub fn register(&mut self, responder: Arc<dyn Responder>) {
        self.responders.push(responder);
    }

    pub fn responders(&self) -> &[Arc<dyn Responder>] {
        &self.responders
    }

    pub fn len(&self) -> usize {
        self.responders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responders.is_empty()
    }

    /// Process a raw line of text
    pub async fn process_text(&self, text: &str) -> DispatchResult {
        let message = Message::new(text.trim_end_matches(['\r', '\n']));
        self.process(&message).await
    }

    /// Process a message through the first matching responder
    pub async fn process(&self, message: &Message) -> DispatchResult {
        let Some((responder, args)) = self
            .responders
            .iter()
            .find_map(|r| r.matches(message).map(|args| (r, args)))
        else {
            tracing::debug!("No command matched: {}", message.preview(50));
            return Ok(None);
        };

        tracing::debug!("[{}] {}", responder.name(), message.preview(50));

        match responder.respond(message, &args).await {
            Ok(reply) => {
                tracing::debug!("[{}] Processed OK", responder.name());
                Ok(Some(reply))
            }
            Err(e) => {
                tracing::warn!("[{}] {} error: {}", responder.name(), e.kind(), e);
                Err(BotError::Responder {
                    command: responder.name().to_string(),
                    source: e,
                })
            }
        }
    }
}
