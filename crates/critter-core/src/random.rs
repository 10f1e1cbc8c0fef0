//! Randomness capability for pets.
//!
//! Training, illness, and treatment outcomes are random. Pets draw through
//! [`RandomSource`] instead of a global generator, so the caller decides
//! whether outcomes come from a seeded `rand` generator or from a fixed
//! script.

use std::collections::VecDeque;

/// A source of uniform random draws.
pub trait RandomSource {
    /// A uniform draw in `[0.0, 1.0)`.
    fn chance(&mut self) -> f64;

    /// A uniform integer in `low..=high`. Returns `low` when `high <= low`.
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Draw once and report whether the draw fell below `probability`.
    fn roll(&mut self, probability: f64) -> bool {
        self.chance() < probability
    }
}

impl<R: rand::Rng> RandomSource for R {
    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.random_range(low..=high)
    }
}

/// Draw used by [`ScriptedRandom`] once its chance queue is empty.
///
/// Sits just below 1.0 so every roll with a probability below 1 fails.
pub const EXHAUSTED_CHANCE: f64 = 0.999_999;

/// A random source that replays queued values in order.
///
/// Chance draws and integer draws come from separate queues. Queued
/// integers are clamped into the requested range. An exhausted chance
/// queue yields [`EXHAUSTED_CHANCE`]; an exhausted integer queue yields
/// the low end of the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    chances: VecDeque<f64>,
    ints: VecDeque<i32>,
    draws: usize,
}

impl ScriptedRandom {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append chance draws to the script.
    #[must_use]
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = f64>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Append integer draws to the script.
    #[must_use]
    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(ints);
        self
    }

    /// Number of draws made so far, of either kind.
    pub const fn draws(&self) -> usize {
        self.draws
    }

    /// Whether both queues have been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.chances.is_empty() && self.ints.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn chance(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        self.chances.pop_front().unwrap_or(EXHAUSTED_CHANCE)
    }

    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.draws = self.draws.saturating_add(1);
        if high <= low {
            return low;
        }
        self.ints
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn rng_chance_stays_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let draw = rng.chance();
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn rng_int_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let draw = rng.int_inclusive(3, 7);
            assert!((3..=7).contains(&draw));
        }
        assert_eq!(rng.int_inclusive(5, 5), 5);
        assert_eq!(rng.int_inclusive(9, 2), 9);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut first = SmallRng::seed_from_u64(42);
        let mut second = SmallRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(first.int_inclusive(0, 100), second.int_inclusive(0, 100));
        }
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut script = ScriptedRandom::new()
            .with_chances([0.1, 0.9])
            .with_ints([4, 2]);
        assert!(script.roll(0.5));
        assert!(!script.roll(0.5));
        assert_eq!(script.int_inclusive(0, 10), 4);
        assert_eq!(script.int_inclusive(0, 10), 2);
        assert_eq!(script.draws(), 4);
        assert!(script.is_exhausted());
    }

    #[test]
    fn scripted_clamps_and_falls_back() {
        let mut script = ScriptedRandom::new().with_ints([50]);
        assert_eq!(script.int_inclusive(3, 7), 7);
        assert_eq!(script.int_inclusive(3, 7), 3);
        assert!(!script.roll(0.99));
    }
}
