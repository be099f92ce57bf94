//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command {command} failed: {source}")]
    Responder {
        command: String,
        #[source]
        source: ResponderError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Responder failures. A message that matches no command is not one of these.
#[derive(Error, Debug)]
pub enum ResponderError {
    /// The external API reported an error itself
    #[error("Remote error: {0}")]
    Remote(String),

    /// Connection failure or timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed or unexpected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Unsupported exchange: {0}")]
    UnsupportedExchange(String),
}

impl ResponderError {
    /// Short kind label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ResponderError::Remote(_) => "remote",
            ResponderError::Transport(_) => "transport",
            ResponderError::Decode(_) => "decode",
            ResponderError::UnsupportedExchange(_) => "unsupported_exchange",
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
