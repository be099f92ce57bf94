//! Domain layer - Core types with no I/O
//! 
//! This layer contains:
//! - Entities: Messages and command signatures
//! - Traits: Responder and RandomSource abstractions

pub mod entities;
pub mod traits;
