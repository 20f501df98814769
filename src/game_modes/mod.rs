mod common;
mod vs_computer;

pub use common::{frame_duration, limit_frame_rate};
pub use vs_computer::{run_match_vs_computer, MatchExit, MatchSession};
