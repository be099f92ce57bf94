//! Command responders
//!
//! One [`Responder`](crate::domain::traits::Responder) per chat command.

pub mod bookmark;
pub mod chat;
pub mod greeting;
pub mod help;
pub mod keyword;
pub mod random_draw;
pub mod ticker;
pub mod video;

pub use bookmark::BookmarkResponder;
pub use chat::ChatResponder;
pub use greeting::GreetingResponder;
pub use help::HelpResponder;
pub use keyword::KeywordResponder;
pub use random_draw::RandomDrawResponder;
pub use ticker::{SpreadResponder, TickerResponder};
pub use video::VideoResponder;
