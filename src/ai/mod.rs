// AI module for the computer opponent

mod bot;
mod opponent;
mod prediction;

pub use bot::{Bot, Role};
pub use opponent::AdaptiveOpponent;

use serde::{Deserialize, Serialize};

/// Difficulty tier chosen before the toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability that the opponent uses its history-based strategy at all
    pub fn weight(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.35,
            Difficulty::Medium => 0.70,
            Difficulty::Hard => 1.0,
        }
    }

    /// Get display name for difficulty
    pub fn display_name(&self) -> &str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Get description for difficulty
    pub fn description(&self) -> &str {
        match self {
            Difficulty::Easy => "Mostly random - reads your habits now and then",
            Difficulty::Medium => "Watches your favourite numbers",
            Difficulty::Hard => "Always plays the odds against you",
        }
    }

    /// Get all difficulties in menu order
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Parse the lowercase name used in config files and on the command line
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Create a bot instance for a difficulty
pub fn create_bot(difficulty: Difficulty) -> Box<dyn Bot> {
    match difficulty {
        Difficulty::Easy => Box::new(AdaptiveOpponent::easy()),
        Difficulty::Medium => Box::new(AdaptiveOpponent::medium()),
        Difficulty::Hard => Box::new(AdaptiveOpponent::hard()),
    }
}
