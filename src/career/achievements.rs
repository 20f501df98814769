// Achievement catalog and unlock evaluation

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::CareerStats;

/// Stable identifiers, persisted as snake_case strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstVictory,
    SerialWinner,
    HalfCentury,
    CenturyScorer,
    FiveWicketHaul,
}

/// Predicate over the post-update stats and the innings score just completed
pub type Predicate = fn(&CareerStats, u32) -> bool;

#[derive(Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    predicate: Predicate,
    unlocked: bool,
}

impl Achievement {
    fn new(
        id: AchievementId,
        title: &'static str,
        description: &'static str,
        predicate: Predicate,
    ) -> Self {
        Self {
            id,
            title,
            description,
            predicate,
            unlocked: false,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

impl fmt::Debug for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Achievement")
            .field("id", &self.id)
            .field("unlocked", &self.unlocked)
            .finish()
    }
}

fn catalog() -> Vec<Achievement> {
    vec![
        Achievement::new(
            AchievementId::FirstVictory,
            "First Victory",
            "Win your first match",
            |stats, _| stats.wins >= 1,
        ),
        Achievement::new(
            AchievementId::SerialWinner,
            "Serial Winner",
            "Win 10 matches",
            |stats, _| stats.wins >= 10,
        ),
        Achievement::new(
            AchievementId::HalfCentury,
            "Half Century",
            "Score 50 runs in an innings",
            |_, score| score >= 50,
        ),
        Achievement::new(
            AchievementId::CenturyScorer,
            "Century Scorer",
            "Score 100 runs in an innings",
            |_, score| score >= 100,
        ),
        Achievement::new(
            AchievementId::FiveWicketHaul,
            "Five Wicket Haul",
            "Take 5 wickets across your career",
            |stats, _| stats.wickets >= 5,
        ),
    ]
}

/// Fixed catalog with one unlock flag per entry.
///
/// Evaluation is pure apart from flipping flags; saving the result is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct AchievementEngine {
    achievements: Vec<Achievement>,
}

impl AchievementEngine {
    pub fn new() -> Self {
        Self {
            achievements: catalog(),
        }
    }

    /// Restore unlock flags from persisted ids
    pub fn with_unlocked(unlocked: &BTreeSet<AchievementId>) -> Self {
        let mut engine = Self::new();
        for achievement in &mut engine.achievements {
            achievement.unlocked = unlocked.contains(&achievement.id);
        }
        engine
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Unlock every locked achievement whose predicate now holds.
    ///
    /// Returns only the ids unlocked by this call, in catalog order, so a
    /// repeat call with the same inputs returns nothing.
    pub fn evaluate(&mut self, stats: &CareerStats, current_score: u32) -> Vec<AchievementId> {
        self.achievements
            .iter_mut()
            .filter(|a| !a.unlocked && (a.predicate)(stats, current_score))
            .map(|a| {
                a.unlocked = true;
                a.id
            })
            .collect()
    }
}

impl Default for AchievementEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_locked_entries() {
        let engine = AchievementEngine::new();
        assert_eq!(engine.achievements().len(), 5);
        assert!(engine.achievements().iter().all(|a| !a.is_unlocked()));
    }

    #[test]
    fn test_first_win_with_fifty_unlocks_two() {
        let mut engine = AchievementEngine::new();
        let stats = CareerStats {
            wins: 1,
            ..CareerStats::default()
        };
        let unlocked = engine.evaluate(&stats, 52);
        assert_eq!(
            unlocked,
            vec![AchievementId::FirstVictory, AchievementId::HalfCentury]
        );
        assert!(!engine.get(AchievementId::CenturyScorer).unwrap().is_unlocked());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut engine = AchievementEngine::new();
        let stats = CareerStats {
            wins: 10,
            wickets: 5,
            ..CareerStats::default()
        };
        assert_eq!(engine.evaluate(&stats, 100).len(), 5);
        assert!(engine.evaluate(&stats, 100).is_empty());
    }

    #[test]
    fn test_unlocks_never_revert() {
        let mut engine = AchievementEngine::new();
        engine.evaluate(&CareerStats::default(), 60);
        // a later low score must not lock it again
        assert!(engine.evaluate(&CareerStats::default(), 3).is_empty());
        assert!(engine.get(AchievementId::HalfCentury).unwrap().is_unlocked());
    }

    #[test]
    fn test_restored_flags_are_not_reported_again() {
        let mut ids = BTreeSet::new();
        ids.insert(AchievementId::FirstVictory);
        let mut engine = AchievementEngine::with_unlocked(&ids);
        let stats = CareerStats {
            wins: 3,
            ..CareerStats::default()
        };
        assert!(engine.evaluate(&stats, 0).is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut engine = AchievementEngine::new();
        let stats = CareerStats {
            wickets: 4,
            ..CareerStats::default()
        };
        assert!(engine.evaluate(&stats, 49).is_empty());
        let stats = CareerStats {
            wickets: 5,
            ..CareerStats::default()
        };
        assert_eq!(
            engine.evaluate(&stats, 50),
            vec![AchievementId::HalfCentury, AchievementId::FiveWicketHaul]
        );
    }
}
