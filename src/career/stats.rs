// Career statistics carried across matches

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::achievements::AchievementId;
use crate::game::MatchResult;

/// Lifetime totals for the human player.
///
/// Serialized under the `"stats"` key with camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_runs: u32,
    pub highest_score: u32,
    /// Wickets taken by the human while bowling
    pub wickets: u32,
    pub unlocked_achievement_ids: BTreeSet<AchievementId>,
}

impl CareerStats {
    pub fn record_result(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }

    pub fn record_innings(&mut self, score: u32) {
        self.total_runs += score;
        self.highest_score = self.highest_score.max(score);
    }

    pub fn record_wicket(&mut self) {
        self.wickets += 1;
    }

    pub fn matches_played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn win_rate(&self) -> f64 {
        let played = self.matches_played();
        if played == 0 {
            0.0
        } else {
            self.wins as f64 / played as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_innings_tracks_best() {
        let mut stats = CareerStats::default();
        stats.record_innings(30);
        stats.record_innings(12);
        assert_eq!(stats.total_runs, 42);
        assert_eq!(stats.highest_score, 30);
    }

    #[test]
    fn test_win_rate() {
        let mut stats = CareerStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        stats.record_result(MatchResult::Win);
        stats.record_result(MatchResult::Loss);
        stats.record_result(MatchResult::Draw);
        stats.record_result(MatchResult::Win);
        assert_eq!(stats.matches_played(), 4);
        assert_eq!(stats.win_rate(), 0.5);
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let mut stats = CareerStats::default();
        stats.total_runs = 7;
        stats
            .unlocked_achievement_ids
            .insert(AchievementId::FirstVictory);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalRuns"], 7);
        assert_eq!(json["highestScore"], 0);
        assert_eq!(
            json["unlockedAchievementIds"],
            serde_json::json!(["first_victory"])
        );
    }
}
