//! Uniform random numbers for position, speed and length jitter.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform random values for the animation.
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: StdRng,
}

impl Default for RandomStream {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomStream {
    /// Create a stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform real in `[min, max)`. Returns `min` for an empty range.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Uniform integer in `[min, max)`. Returns `min` for an empty range.
    pub fn range_usize(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.rng.random_range(min..max)
    }

    /// Uniformly chosen element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.range_usize(0, items.len())]
    }
}
