use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Most recent human inputs kept for the opponent's predictor
pub const HISTORY_CAP: usize = 10;

/// One of the two sides in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Side::Player => "You",
            Side::Computer => "Computer",
        }
    }
}

/// Outcome of a finished match, always from the human's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    pub fn title(&self) -> &str {
        match self {
            MatchResult::Win => "You Win!",
            MatchResult::Loss => "You Lose",
            MatchResult::Draw => "It's a Draw",
        }
    }
}

/// Match state machine phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    DifficultySelect,
    /// `awaiting_choice` is set once the human has won the toss and still
    /// owes a bat/bowl decision
    Toss { awaiting_choice: bool },
    Batting(Side),
    InningsBreak,
    GameOver(MatchResult),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::DifficultySelect => write!(f, "difficulty select"),
            Phase::Toss { .. } => write!(f, "toss"),
            Phase::Batting(side) => write!(f, "batting ({})", side.display_name()),
            Phase::InningsBreak => write!(f, "innings break"),
            Phase::GameOver(_) => write!(f, "game over"),
        }
    }
}

/// Rock/paper/scissors call used for the toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock) | (Hand::Scissors, Hand::Paper)
        )
    }

    pub fn display_name(&self) -> &str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }
}

/// Decision made by the toss winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatOrBowl {
    Bat,
    Bowl,
}

/// Rolling window of the human's raw inputs for the current innings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BallHistory {
    moves: VecDeque<u8>,
}

impl BallHistory {
    pub fn push(&mut self, value: u8) {
        if self.moves.len() == HISTORY_CAP {
            self.moves.pop_front();
        }
        self.moves.push_back(value);
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Oldest first
    pub fn to_vec(&self) -> Vec<u8> {
        self.moves.iter().copied().collect()
    }
}

/// Live match state, owned by the engine
#[derive(Debug, Clone)]
pub struct Match {
    pub player_score: u32,
    pub computer_score: u32,
    /// 0 until the first innings ends, then first-innings score + 1
    pub target: u32,
    pub innings: u8,
    pub phase: Phase,
    pub history: BallHistory,
    pub last_player_move: Option<u8>,
    pub last_computer_move: Option<u8>,
}

impl Match {
    pub fn new() -> Self {
        Self {
            player_score: 0,
            computer_score: 0,
            target: 0,
            innings: 1,
            phase: Phase::DifficultySelect,
            history: BallHistory::default(),
            last_player_move: None,
            last_computer_move: None,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Computer => self.computer_score,
        }
    }

    pub fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Player => &mut self.player_score,
            Side::Computer => &mut self.computer_score,
        }
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable view of the match handed back from every engine call
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub player_score: u32,
    pub computer_score: u32,
    pub target: u32,
    pub innings: u8,
    pub last_player_move: Option<u8>,
    pub last_computer_move: Option<u8>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_evicts_oldest() {
        let mut history = BallHistory::default();
        for value in 1..=12u8 {
            history.push(value % 6 + 1);
        }
        assert_eq!(history.to_vec().len(), HISTORY_CAP);
        // the first two pushes (2 and 3) are evicted
        assert_eq!(history.to_vec(), vec![4, 5, 6, 1, 2, 3, 4, 5, 6, 1]);
    }

    #[test]
    fn test_beats_relation() {
        assert!(Hand::Rock.beats(Hand::Scissors));
        assert!(Hand::Paper.beats(Hand::Rock));
        assert!(Hand::Scissors.beats(Hand::Paper));
        for hand in Hand::ALL {
            assert!(!hand.beats(hand));
        }
        assert!(!Hand::Scissors.beats(Hand::Rock));
    }
}
