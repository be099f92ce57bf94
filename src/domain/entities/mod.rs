//! Domain entities - Core values with no external dependencies

pub mod command;
pub mod message;

pub use command::{CommandMatch, CommandSignature, SignatureKind};
pub use message::Message;
