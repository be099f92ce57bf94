//! Application layer - Dispatch and wiring
//! 
//! This layer contains:
//! - Errors: Bot, responder and config errors
//! - Messaging: Message dispatching
//! - Services: Building responders from configuration

pub mod errors;
pub mod messaging;
pub mod services;
