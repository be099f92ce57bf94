//! Greeting command

use async_trait::async_trait;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;

/// Replies with the message body followed by a fixed suffix
pub struct GreetingResponder {
    signature: CommandSignature,
    suffix: String,
}

impl GreetingResponder {
    pub fn new() -> Self {
        Self::with_suffix("hello", ", world!")
    }

    pub fn with_suffix(token: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            signature: CommandSignature::exact(token),
            suffix: suffix.into(),
        }
    }
}

impl Default for GreetingResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for GreetingResponder {
    fn name(&self) -> &str {
        "hello"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "Say hello"
    }

    async fn respond(&self, message: &Message, _args: &CommandMatch) -> Result<Message, ResponderError> {
        Ok(Message::new(format!("{}{}", message.body, self.suffix)))
    }
}
