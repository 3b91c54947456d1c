//! Random source adapter.
//!
//! Every die roll and treasure draw consumes a single primitive, a uniform
//! integer in `[low, high)`. Callers pick the source: a seeded generator for
//! real play, [`FixedRange`] for side-effect-free probing, or
//! [`ScriptedRange`] to replay literal draws in tests.
//!
//! # Determinism
//!
//! Given the same sequence of draws the whole game is reproducible; nothing
//! in the engine reads randomness from anywhere else.

/// Uniform integer source over a half-open range.
pub trait RandRange {
    /// Returns a value in `[low, high)`. Implementations may return `low`
    /// when the range is empty.
    fn range(&mut self, low: u32, high: u32) -> u32;
}

impl<F> RandRange for F
where
    F: FnMut(u32, u32) -> u32,
{
    fn range(&mut self, low: u32, high: u32) -> u32 {
        self(low, high)
    }
}

/// Always answers the lowest permitted value.
///
/// Used to ask "would this succeed?" without touching real randomness.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedRange;

impl RandRange for FixedRange {
    fn range(&mut self, low: u32, _high: u32) -> u32 {
        low
    }
}

/// Replays a canned sequence of draws, cycling once exhausted.
///
/// Each draw is reduced modulo the requested span, so a script of `[0, 1, 2]`
/// yields faces 0, 1, 2 when rolling six-sided dice.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRange {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedRange {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandRange for ScriptedRange {
    fn range(&mut self, low: u32, high: u32) -> u32 {
        let span = high.saturating_sub(low);
        if span == 0 || self.draws.is_empty() {
            return low;
        }
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        low + draw % span
    }
}
