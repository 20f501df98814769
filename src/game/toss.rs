// Rock/paper/scissors toss deciding who picks bat or bowl

use super::dice::Dice;
use super::state::{BatOrBowl, Hand};

/// Result of one toss call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TossOutcome {
    /// Same hand on both sides; the caller asks the human to call again
    Tie { hand: Hand },
    /// The human won and picks bat or bowl next
    PlayerWon { player: Hand, computer: Hand },
    /// The computer won and has already made its choice
    ComputerWon {
        player: Hand,
        computer: Hand,
        decision: BatOrBowl,
    },
}

/// Resolve a single toss against a uniformly drawn computer hand.
///
/// Ties are returned as-is: there is no retry loop here.
pub fn resolve_toss(player: Hand, dice: &mut dyn Dice) -> TossOutcome {
    let computer = Hand::ALL[dice.below(Hand::ALL.len())];

    if player == computer {
        return TossOutcome::Tie { hand: player };
    }

    if player.beats(computer) {
        TossOutcome::PlayerWon { player, computer }
    } else {
        let decision = if dice.below(2) == 0 {
            BatOrBowl::Bat
        } else {
            BatOrBowl::Bowl
        };
        TossOutcome::ComputerWon {
            player,
            computer,
            decision,
        }
    }
}
