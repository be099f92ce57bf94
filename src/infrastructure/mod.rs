//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Gateway: HTTP calls with JSON decoding
//! - Exchange: Cryptocurrency ticker client
//! - Adapters: Console I/O

pub mod adapters;
pub mod config;
pub mod exchange;
pub mod gateway;
