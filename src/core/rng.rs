//! Deterministic random number generation for bracket seeding.
//!
//! Same seed, same order. Hosts that want a fresh draw each session pick
//! a new seed; replays and tests reuse one.
//!
//! ```
//! use minigame_engine::core::SeedRng;
//!
//! let mut a = vec![1, 2, 3, 4, 5, 6];
//! let mut b = a.clone();
//! SeedRng::new(9).shuffle(&mut a);
//! SeedRng::new(9).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SeedRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeedRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
