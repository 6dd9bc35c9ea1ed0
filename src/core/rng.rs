//! Deterministic random number generation for agents and training.
//!
//! Same seed, same sequence. Every strategy instance owns its own `GameRng`;
//! nothing in the crate samples from ambient global state, which is what
//! makes evaluation matches reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG handed to each strategy instance.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a uniform f64 in `[0, 1)`.
    pub fn gen_f64(&mut self) -> f64 {
        self.inner.gen()
    }
}
