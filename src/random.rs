//! Sources of randomness for shuffling and random draws.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform randomness.
///
/// Implement this to make shuffles and random draws deterministic in tests.
pub trait RandomSource {
    /// Permutes `items` uniformly at random, in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Returns a uniformly random index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// A seedable random source backed by `ChaCha8`.
///
/// The same seed always yields the same sequence of shuffles and picks.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a random source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
