// Match state machine: toss, innings, target chase and result

use thiserror::Error;
use tracing::{debug, info};

use crate::ai::{self, Bot, Difficulty, Role};

use super::dice::Dice;
use super::events::MatchEvent;
use super::state::{BatOrBowl, Hand, Match, MatchResult, Phase, Side, Snapshot};
use super::toss::{resolve_toss, TossOutcome};

/// Why the engine refused a call. A rejected call never mutates the match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("ball value {0} is outside 1..=6")]
    InvalidBall(u8),

    #[error("the previous ball is still being revealed")]
    Busy,

    #[error("{action} is not allowed during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("only the toss winner may choose to bat or bowl")]
    NotTossWinner,
}

/// Result of an accepted engine call
#[derive(Debug, Clone)]
pub struct Step {
    pub snapshot: Snapshot,
    pub events: Vec<MatchEvent>,
}

/// Owns the single live match and drives it through its phases.
///
/// The engine never schedules anything itself: after an accepted ball it
/// holds a processing lock until the caller invokes
/// [`MatchEngine::complete_resolution`], typically once a reveal animation
/// has finished.
pub struct MatchEngine {
    state: Match,
    difficulty: Difficulty,
    bot: Box<dyn Bot>,
    dice: Box<dyn Dice>,
    resolving: bool,
    message: String,
}

impl MatchEngine {
    pub fn new(dice: Box<dyn Dice>) -> Self {
        let difficulty = Difficulty::Medium;
        Self {
            state: Match::new(),
            difficulty,
            bot: ai::create_bot(difficulty),
            dice,
            resolving: false,
            message: "Choose a difficulty".to_string(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.state.phase,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            target: self.state.target,
            innings: self.state.innings,
            last_player_move: self.state.last_player_move,
            last_computer_move: self.state.last_computer_move,
            message: self.message.clone(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Human inputs the opponent is currently reading, oldest first
    #[cfg(test)]
    pub fn history(&self) -> Vec<u8> {
        self.state.history.to_vec()
    }

    /// True while a ball can be accepted
    pub fn ready_for_next_ball(&self) -> bool {
        matches!(self.state.phase, Phase::Batting(_)) && !self.resolving
    }

    pub fn is_resolving(&self) -> bool {
        self.resolving
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<Step, MatchError> {
        self.expect_phase("select_difficulty", |phase| {
            matches!(phase, Phase::DifficultySelect)
        })?;

        self.difficulty = difficulty;
        self.bot = ai::create_bot(difficulty);
        self.state.phase = Phase::Toss {
            awaiting_choice: false,
        };
        self.message = format!(
            "{} opponent. Call the toss: Rock, Paper or Scissors",
            difficulty.display_name()
        );
        info!(
            difficulty = difficulty.display_name(),
            opponent = self.bot.name(),
            "difficulty selected"
        );

        Ok(self.step(Vec::new()))
    }

    pub fn resolve_toss(&mut self, hand: Hand) -> Result<Step, MatchError> {
        self.expect_phase("resolve_toss", |phase| {
            matches!(
                phase,
                Phase::Toss {
                    awaiting_choice: false
                }
            )
        })?;

        let outcome = resolve_toss(hand, self.dice.as_mut());
        let mut events = vec![MatchEvent::Toss(outcome)];
        debug!(?outcome, "toss resolved");

        match outcome {
            TossOutcome::Tie { hand } => {
                self.message = format!("Both threw {} - toss again!", hand.display_name());
            }
            TossOutcome::PlayerWon { player, computer } => {
                self.state.phase = Phase::Toss {
                    awaiting_choice: true,
                };
                self.message = format!(
                    "{} beats {} - you won the toss! Bat or bowl?",
                    player.display_name(),
                    computer.display_name()
                );
            }
            TossOutcome::ComputerWon {
                player,
                computer,
                decision,
            } => {
                let batting = match decision {
                    BatOrBowl::Bat => Side::Computer,
                    BatOrBowl::Bowl => Side::Player,
                };
                self.start_innings(batting, &mut events);
                let verb = match decision {
                    BatOrBowl::Bat => "bat",
                    BatOrBowl::Bowl => "bowl",
                };
                self.message = format!(
                    "{} beats {} - computer won the toss and chose to {}",
                    computer.display_name(),
                    player.display_name(),
                    verb
                );
            }
        }

        Ok(self.step(events))
    }

    pub fn choose_bat_or_bowl(&mut self, choice: BatOrBowl) -> Result<Step, MatchError> {
        match self.state.phase {
            Phase::Toss {
                awaiting_choice: true,
            } => {}
            Phase::Toss {
                awaiting_choice: false,
            } => return Err(MatchError::NotTossWinner),
            phase => {
                return Err(MatchError::WrongPhase {
                    action: "choose_bat_or_bowl",
                    phase,
                })
            }
        }

        let batting = match choice {
            BatOrBowl::Bat => Side::Player,
            BatOrBowl::Bowl => Side::Computer,
        };
        let mut events = Vec::new();
        self.start_innings(batting, &mut events);
        self.message = match batting {
            Side::Player => "You're batting. Pick 1-6".to_string(),
            Side::Computer => "You're bowling. Pick 1-6".to_string(),
        };

        Ok(self.step(events))
    }

    /// Resolve one ball with the human's value.
    ///
    /// The opponent's move is chosen from the history *before* this input is
    /// added to it.
    pub fn play_ball(&mut self, value: u8) -> Result<Step, MatchError> {
        let batting = match self.state.phase {
            Phase::Batting(side) => side,
            phase => {
                return Err(MatchError::WrongPhase {
                    action: "play_ball",
                    phase,
                })
            }
        };
        if self.resolving {
            return Err(MatchError::Busy);
        }
        if !(1..=6).contains(&value) {
            return Err(MatchError::InvalidBall(value));
        }

        // The computer's role picks the strategy; the history is always the human's
        let role = match batting {
            Side::Player => Role::Bowling,
            Side::Computer => Role::Batting,
        };
        let history = self.state.history.to_vec();
        let computer = self.bot.next_move(&history, role, self.dice.as_mut());
        self.state.history.push(value);

        self.state.last_player_move = Some(value);
        self.state.last_computer_move = Some(computer);
        self.resolving = true;

        debug!(
            batting = batting.display_name(),
            player = value,
            computer,
            "ball played"
        );

        let mut events = vec![MatchEvent::BallPlayed {
            batting,
            player_move: value,
            computer_move: computer,
        }];

        let (batsman, bowler) = match batting {
            Side::Player => (value, computer),
            Side::Computer => (computer, value),
        };

        if batsman == bowler {
            self.dismiss(batting, &mut events);
        } else {
            self.score_runs(batting, batsman, &mut events);
        }

        Ok(self.step(events))
    }

    /// Release the processing lock once the reveal is over
    pub fn complete_resolution(&mut self) -> Snapshot {
        self.resolving = false;
        self.snapshot()
    }

    /// Start over from difficulty selection, keeping the random source
    pub fn reset(&mut self) -> Snapshot {
        self.state = Match::new();
        self.resolving = false;
        self.message = "Choose a difficulty".to_string();
        self.snapshot()
    }

    fn expect_phase(
        &self,
        action: &'static str,
        allowed: impl Fn(Phase) -> bool,
    ) -> Result<(), MatchError> {
        if allowed(self.state.phase) {
            Ok(())
        } else {
            Err(MatchError::WrongPhase {
                action,
                phase: self.state.phase,
            })
        }
    }

    fn start_innings(&mut self, batting: Side, events: &mut Vec<MatchEvent>) {
        if self.state.phase == Phase::InningsBreak {
            self.state.innings = 2;
        } else {
            self.state.innings = 1;
            self.state.target = 0;
            self.state.player_score = 0;
            self.state.computer_score = 0;
        }

        *self.state.score_mut(batting) = 0;
        self.state.history.clear();
        self.state.phase = Phase::Batting(batting);

        info!(
            innings = self.state.innings,
            batting = batting.display_name(),
            "innings started"
        );
        events.push(MatchEvent::InningsStarted {
            innings: self.state.innings,
            batting,
        });
    }

    fn dismiss(&mut self, batting: Side, events: &mut Vec<MatchEvent>) {
        let score = self.state.score(batting);
        events.push(MatchEvent::Wicket { batting, score });
        events.push(MatchEvent::InningsComplete {
            side: batting,
            score,
        });

        let target = self.state.target;
        if target == 0 {
            let target = score + 1;
            self.state.target = target;
            self.state.phase = Phase::InningsBreak;
            events.push(MatchEvent::InningsBreak { target });
            self.start_innings(batting.other(), events);

            self.message = match batting {
                Side::Player => format!("OUT! You made {score}. Computer needs {target} to win"),
                Side::Computer => format!("OUT! Computer made {score}. You need {target} to win"),
            };
            return;
        }

        let result = if score == target - 1 {
            MatchResult::Draw
        } else {
            match batting {
                Side::Player => MatchResult::Loss,
                Side::Computer => MatchResult::Win,
            }
        };
        self.message = match result {
            MatchResult::Draw => format!("OUT on {score} - scores level!"),
            _ => format!(
                "OUT! {} fell {} short",
                batting.display_name(),
                target - score
            ),
        };
        self.finish(result, events);
    }

    fn score_runs(&mut self, batting: Side, runs: u8, events: &mut Vec<MatchEvent>) {
        let total = {
            let score = self.state.score_mut(batting);
            *score += u32::from(runs);
            *score
        };
        events.push(MatchEvent::RunsScored {
            side: batting,
            runs,
            total,
        });

        let target = self.state.target;
        if target > 0 && total >= target {
            events.push(MatchEvent::InningsComplete {
                side: batting,
                score: total,
            });
            self.message = format!("{} reached the target!", batting.display_name());
            let result = match batting {
                Side::Player => MatchResult::Win,
                Side::Computer => MatchResult::Loss,
            };
            self.finish(result, events);
            return;
        }

        self.message = match (batting, target) {
            (Side::Player, 0) => format!("+{runs}! You're on {total}"),
            (Side::Computer, 0) => format!("Computer scores {runs}, on {total}"),
            (Side::Player, _) => format!("+{runs}! Need {} more", target - total),
            (Side::Computer, _) => format!("Computer scores {runs}, needs {} more", target - total),
        };
    }

    fn finish(&mut self, result: MatchResult, events: &mut Vec<MatchEvent>) {
        self.state.phase = Phase::GameOver(result);
        info!(
            ?result,
            player = self.state.player_score,
            computer = self.state.computer_score,
            target = self.state.target,
            "match over"
        );
        events.push(MatchEvent::MatchOver {
            result,
            player_score: self.state.player_score,
            computer_score: self.state.computer_score,
            target: self.state.target,
        });
    }

    fn step(&self, events: Vec<MatchEvent>) -> Step {
        Step {
            snapshot: self.snapshot(),
            events,
        }
    }
}
