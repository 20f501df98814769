// Folds match events into career stats and achievement unlocks

use tracing::info;

use super::achievements::{AchievementEngine, AchievementId};
use super::stats::CareerStats;
use crate::game::{MatchEvent, Side};

/// What the caller has to do after a step's events were applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CareerUpdate {
    pub unlocked: Vec<AchievementId>,
    /// The match ended: write the stats out
    pub should_persist: bool,
}

/// Career stats plus the achievement flags derived from them
#[derive(Debug, Clone)]
pub struct CareerTracker {
    stats: CareerStats,
    achievements: AchievementEngine,
}

impl CareerTracker {
    pub fn new(stats: CareerStats) -> Self {
        let achievements = AchievementEngine::with_unlocked(&stats.unlocked_achievement_ids);
        Self {
            stats,
            achievements,
        }
    }

    pub fn stats(&self) -> &CareerStats {
        &self.stats
    }

    pub fn achievements(&self) -> &AchievementEngine {
        &self.achievements
    }

    /// Apply every event from one engine step. Stats move with every
    /// event; achievements are evaluated once, on the step that ends the
    /// match, against the human's final score.
    pub fn apply(&mut self, events: &[MatchEvent]) -> CareerUpdate {
        let mut final_score = None;

        for event in events {
            match *event {
                MatchEvent::InningsComplete {
                    side: Side::Player,
                    score,
                } => self.stats.record_innings(score),
                MatchEvent::Wicket {
                    batting: Side::Computer,
                    ..
                } => self.stats.record_wicket(),
                MatchEvent::MatchOver {
                    result,
                    player_score,
                    ..
                } => {
                    self.stats.record_result(result);
                    final_score = Some(player_score);
                }
                _ => {}
            }
        }

        let Some(score) = final_score else {
            return CareerUpdate::default();
        };

        let unlocked = self.achievements.evaluate(&self.stats, score);
        for id in &unlocked {
            info!(?id, "achievement unlocked");
            self.stats.unlocked_achievement_ids.insert(*id);
        }

        CareerUpdate {
            should_persist: true,
            unlocked,
        }
    }
}
