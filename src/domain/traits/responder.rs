use async_trait::async_trait;
use crate::domain::entities::{CommandMatch, CommandSignature, Message};
use crate::application::errors::ResponderError;

/// Responder trait - one implementation per chat command
#[async_trait]
pub trait Responder: Send + Sync {
    /// Command name used in logs and help output
    fn name(&self) -> &str;

    /// Signature a message must match for this responder to run
    fn signature(&self) -> &CommandSignature;

    /// One-line description for help output
    fn description(&self) -> &str {
        ""
    }

    /// Usage line for help output
    fn usage(&self) -> String {
        self.signature().to_string()
    }

    /// Match a message against this responder's signature
    fn matches(&self, message: &Message) -> Option<CommandMatch> {
        self.signature().matches(&message.body)
    }

    /// Produce a reply for a message that matched
    async fn respond(&self, message: &Message, args: &CommandMatch) -> Result<Message, ResponderError>;
}
