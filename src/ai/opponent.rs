// Adaptive opponent that reads the human's favourite numbers

use super::bot::{Bot, Role};
use super::prediction::most_frequent;
use super::Difficulty;
use crate::game::Dice;

/// Inputs needed before the opponent starts predicting
const MIN_HISTORY: usize = 3;

/// Configuration for an adaptive opponent's behavior
#[derive(Debug, Clone)]
pub struct AdaptiveOpponentConfig {
    pub name: String,
    pub weight: f64,     // Chance of using the history-based strategy on a ball
    pub avoid_rate: f64, // While batting, chance of steering clear of the bowler's habit
}

/// Opponent that predicts the human's most frequent value.
///
/// Bowling, it throws the human's habitual value hoping to match it.
/// Batting, it mostly avoids that value so the human can't bowl it out by
/// repeating themselves.
pub struct AdaptiveOpponent {
    config: AdaptiveOpponentConfig,
}

impl AdaptiveOpponent {
    pub fn new(config: AdaptiveOpponentConfig) -> Self {
        Self { config }
    }

    /// Rarely predicts
    pub fn easy() -> Self {
        Self::new(AdaptiveOpponentConfig {
            name: Difficulty::Easy.display_name().to_string(),
            weight: Difficulty::Easy.weight(),
            avoid_rate: 0.8,
        })
    }

    pub fn medium() -> Self {
        Self::new(AdaptiveOpponentConfig {
            name: Difficulty::Medium.display_name().to_string(),
            weight: Difficulty::Medium.weight(),
            avoid_rate: 0.8,
        })
    }

    /// Predicts on every ball once it has enough history
    pub fn hard() -> Self {
        Self::new(AdaptiveOpponentConfig {
            name: Difficulty::Hard.display_name().to_string(),
            weight: Difficulty::Hard.weight(),
            avoid_rate: 0.8,
        })
    }

    fn bat_around(&self, habit: u8, dice: &mut dyn Dice) -> u8 {
        if dice.unit() < self.config.avoid_rate {
            let candidates: Vec<u8> = (1..=6).filter(|&value| value != habit).collect();
            candidates[dice.below(candidates.len())]
        } else {
            dice.face()
        }
    }
}

impl Bot for AdaptiveOpponent {
    fn next_move(&mut self, history: &[u8], role: Role, dice: &mut dyn Dice) -> u8 {
        // The weight roll is always taken so the draw sequence doesn't depend
        // on how long the history is
        let roll = dice.unit();
        if roll > self.config.weight || history.len() < MIN_HISTORY {
            return dice.face();
        }

        let Some(habit) = most_frequent(history) else {
            return dice.face();
        };

        match role {
            Role::Bowling => habit,
            Role::Batting => self.bat_around(habit, dice),
        }
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
