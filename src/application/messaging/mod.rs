//! Message handling - Routes inbound messages to responders

pub mod dispatcher;

pub use dispatcher::{DispatchResult, MessageDispatcher};
