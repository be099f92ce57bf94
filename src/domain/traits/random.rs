use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniformly distributed indices
pub trait RandomSource: Send + Sync {
    /// Uniform index in `[0, n)`. `n` is never zero.
    fn next_index(&self, n: usize) -> usize;
}

/// Thread-local OS-seeded generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&self, n: usize) -> usize {
        rand::thread_rng().gen_range(0..n)
    }
}

/// Deterministic generator for reproducible draws
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&self, n: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..n),
            // A poisoned lock still holds a usable generator
            Err(poisoned) => poisoned.into_inner().gen_range(0..n),
        }
    }
}
