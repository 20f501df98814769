// Career module: lifetime stats, achievements and the event fold that
// keeps them up to date

pub mod achievements;
pub mod stats;
pub mod tracker;

pub use achievements::{AchievementEngine, AchievementId};
pub use stats::CareerStats;
pub use tracker::CareerTracker;
