//! Domain traits - Abstractions over command handling and randomness

pub mod random;
pub mod responder;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use responder::Responder;
