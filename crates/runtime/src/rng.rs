//! Seeded random source for real play.
use droll_core::RandRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// [`RandRange`] backed by a seedable `StdRng`.
///
/// The same seed replays the same game for the same commands.
#[derive(Clone, Debug)]
pub struct SeededRange(StdRng);

impl SeededRange {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl RandRange for SeededRange {
    fn range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }
}
