//! Help command

use async_trait::async_trait;
use crate::application::errors::ResponderError;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::domain::traits::Responder;

/// Lists the enabled commands
pub struct HelpResponder {
    signature: CommandSignature,
    text: String,
}

impl HelpResponder {
    /// `entries` are `(usage, description)` pairs in dispatch order
    pub fn new(entries: &[(String, String)]) -> Self {
        let mut text = "Available commands:\n".to_string();
        for (usage, description) in entries {
            if description.is_empty() {
                text.push_str(&format!("  {}\n", usage));
            } else {
                text.push_str(&format!("  {} - {}\n", usage, description));
            }
        }

        Self {
            signature: CommandSignature::exact("help"),
            text: text.trim_end().to_string(),
        }
    }
}

#[async_trait]
impl Responder for HelpResponder {
    fn name(&self) -> &str {
        "help"
    }

    fn signature(&self) -> &CommandSignature {
        &self.signature
    }

    fn description(&self) -> &str {
        "Show this message"
    }

    async fn respond(&self, _message: &Message, _args: &CommandMatch) -> Result<Message, ResponderError> {
        Ok(Message::new(self.text.clone()))
    }
}
