// Bot trait for computer opponents

use crate::game::Dice;

/// The computer's role on the current ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Batting,
    Bowling,
}

/// Trait for computer opponent implementations
///
/// A bot sees the human's recent raw inputs (oldest first) and picks its own
/// value for the ball. All randomness comes from the supplied dice so that
/// matches replay exactly under a fixed seed.
pub trait Bot {
    /// Choose the computer's value (1..=6) for this ball
    ///
    /// # Arguments
    /// * `history` - Human's most recent inputs this innings, oldest first
    /// * `role` - Whether the computer is batting or bowling
    /// * `dice` - Random source
    fn next_move(&mut self, history: &[u8], role: Role, dice: &mut dyn Dice) -> u8;

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}
