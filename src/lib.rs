//! dojo-bot - prefix-command chat responders

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod responders;

pub use application::errors::{BotError, ConfigError, ResponderError};
pub use application::messaging::MessageDispatcher;
pub use application::services::ResponderRegistry;
pub use domain::entities::{CommandMatch, CommandSignature, Message};
pub use domain::traits::{RandomSource, Responder};
pub use infrastructure::config::Config;
