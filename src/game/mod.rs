pub mod dice;
pub mod engine;
pub mod events;
pub mod input;
pub mod state;
pub mod toss;

pub use dice::{Dice, RandDice};
pub use engine::{MatchEngine, MatchError, Step};
pub use events::MatchEvent;
pub use input::{poll_input, InputAction};
pub use state::{BatOrBowl, Hand, MatchResult, Phase, Side, Snapshot};
