// Events emitted by the match engine for the orchestration layer

use super::state::{MatchResult, Side};
use super::toss::TossOutcome;

/// Something that happened while the engine processed a call.
///
/// Events come back in the order they occurred; a single ball can produce a
/// dismissal, an innings break and the start of the next innings.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    Toss(TossOutcome),
    InningsStarted {
        innings: u8,
        batting: Side,
    },
    BallPlayed {
        batting: Side,
        player_move: u8,
        computer_move: u8,
    },
    RunsScored {
        side: Side,
        runs: u8,
        total: u32,
    },
    /// The batting side was dismissed
    Wicket {
        batting: Side,
        score: u32,
    },
    /// An innings closed, either by dismissal or by reaching the target
    InningsComplete {
        side: Side,
        score: u32,
    },
    InningsBreak {
        target: u32,
    },
    MatchOver {
        result: MatchResult,
        player_score: u32,
        computer_score: u32,
        target: u32,
    },
}
