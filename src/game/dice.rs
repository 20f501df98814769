// Random source shared by the toss and the computer opponent

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random draws used by game logic.
///
/// Everything random in a match goes through this trait so that tests can
/// script the exact sequence of draws.
pub trait Dice {
    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Uniform integer in `0..n` (`n` must be non-zero)
    fn below(&mut self, n: usize) -> usize;

    /// Uniform ball value in `1..=6`
    fn face(&mut self) -> u8 {
        self.below(6) as u8 + 1
    }
}

/// Production dice backed by a seedable `StdRng`
pub struct RandDice {
    rng: StdRng,
}

impl RandDice {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Dice for RandDice {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn below(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

#[cfg(test)]
pub use scripted::ScriptedDice;

#[cfg(test)]
mod scripted {
    use super::Dice;
    use std::collections::VecDeque;

    /// Replays pre-recorded draws; panics when a queue runs dry so a test
    /// never silently consumes an unexpected draw.
    #[derive(Debug, Default)]
    pub struct ScriptedDice {
        units: VecDeque<f64>,
        picks: VecDeque<usize>,
    }

    impl ScriptedDice {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_unit(mut self, value: f64) -> Self {
            self.units.push_back(value);
            self
        }

        pub fn with_pick(mut self, index: usize) -> Self {
            self.picks.push_back(index);
            self
        }

        /// Put a pick ahead of everything already queued
        pub fn with_pick_front(mut self, index: usize) -> Self {
            self.picks.push_front(index);
            self
        }

        /// Queue every draw of `other` after the ones already queued
        pub fn append(mut self, mut other: ScriptedDice) -> Self {
            self.units.append(&mut other.units);
            self.picks.append(&mut other.picks);
            self
        }

        /// Queue a weight roll of 0.99 followed by a face pick.
        pub fn random_ball(self, face: u8) -> Self {
            self.with_unit(0.99).with_pick(face as usize - 1)
        }

        pub fn is_exhausted(&self) -> bool {
            self.units.is_empty() && self.picks.is_empty()
        }
    }

    impl Dice for ScriptedDice {
        fn unit(&mut self) -> f64 {
            self.units.pop_front().expect("scripted unit draw exhausted")
        }

        fn below(&mut self, n: usize) -> usize {
            let pick = self.picks.pop_front().expect("scripted pick exhausted");
            assert!(pick < n, "scripted pick {pick} out of range 0..{n}");
            pick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dice_repeat() {
        let mut a = RandDice::seeded(7);
        let mut b = RandDice::seeded(7);
        for _ in 0..50 {
            assert_eq!(a.face(), b.face());
        }
    }

    #[test]
    fn test_faces_stay_in_range() {
        let mut dice = RandDice::seeded(42);
        for _ in 0..1000 {
            let face = dice.face();
            assert!((1..=6).contains(&face));
            let unit = dice.unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }
}
