//! Randomness seam shared by combat, enhancement, rewards and raids.
//!
//! Every roll in the simulation core goes through [`Dice`]. Any `rand::Rng`
//! is a `Dice`; [`ScriptedDice`] replays fixed values so tests can force a
//! specific branch.

use rand::Rng;
use std::collections::VecDeque;

pub trait Dice {
    /// Uniform roll in `[0, 100)`.
    fn roll_percent(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn roll_range(&mut self, low: f64, high: f64) -> f64;

    /// Index into a collection of `len` elements, drawn from one percent
    /// roll. Returns 0 for an empty collection.
    fn pick(&mut self, len: usize) -> usize {
        let roll = self.roll_percent();
        ((roll / 100.0 * len as f64) as usize).min(len.saturating_sub(1))
    }
}

impl<R: Rng> Dice for R {
    fn roll_percent(&mut self) -> f64 {
        self.gen_range(0.0..100.0)
    }

    fn roll_range(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.gen_range(low..high)
    }
}

/// Dice that return queued values in order.
///
/// Once the queue is drained, `roll_percent` returns the fallback and
/// `roll_range` returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<f64>,
    fallback: f64,
    consumed: usize,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.0,
            consumed: 0,
        }
    }

    /// Every percent roll returns `value`.
    pub fn always(value: f64) -> Self {
        Self::new([]).with_fallback(value)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Number of rolls served so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl Dice for ScriptedDice {
    fn roll_percent(&mut self) -> f64 {
        self.consumed += 1;
        self.values.pop_front().unwrap_or(self.fallback)
    }

    fn roll_range(&mut self, low: f64, _high: f64) -> f64 {
        self.consumed += 1;
        self.values.pop_front().unwrap_or(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rng_percent_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let roll = rng.roll_percent();
            assert!((0.0..100.0).contains(&roll));
        }
    }

    #[test]
    fn test_rng_range_degenerate_returns_low() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(rng.roll_range(1.0, 1.0), 1.0);
    }

    #[test]
    fn test_scripted_dice_replays_in_order() {
        let mut dice = ScriptedDice::new([10.0, 95.0, 1.1]);
        assert_eq!(dice.roll_percent(), 10.0);
        assert_eq!(dice.roll_percent(), 95.0);
        assert_eq!(dice.roll_range(0.8, 1.2), 1.1);
        assert_eq!(dice.consumed(), 3);
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_pick_maps_percent_to_index() {
        let mut dice = ScriptedDice::new([0.0, 49.9, 50.0, 99.99]);
        assert_eq!(dice.pick(4), 0);
        assert_eq!(dice.pick(4), 1);
        assert_eq!(dice.pick(4), 2);
        assert_eq!(dice.pick(4), 3);
        assert_eq!(ScriptedDice::always(99.0).pick(0), 0);
    }

    #[test]
    fn test_scripted_dice_fallback() {
        let mut dice = ScriptedDice::always(99.0);
        assert_eq!(dice.roll_percent(), 99.0);
        assert_eq!(dice.roll_range(0.8, 1.2), 0.8);
    }
}
