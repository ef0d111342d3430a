//! Deterministic run-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each run gets a single `SmallRng` seeded from the seed in `RunConfig`.
//! The seed is always an explicit parameter — there is no global or
//! thread-local randomness anywhere in the pipeline, so the same seed and
//! parameters always reproduce the same sample sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Run-level deterministic RNG.
///
/// Create one per run from the explicit seed; every random draw in the
/// traffic generator flows through it in a fixed order.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
