// Persistence for career stats and the theme preference
//
// Two keys: "stats" (JSON object) and "theme" (JSON string). Reads fail
// closed to defaults and writes are best-effort.

pub mod error;
pub mod kv;

pub use error::StoreError;
pub use kv::{FileStore, KvStore};

#[cfg(test)]
pub use kv::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::career::CareerStats;
use crate::ui::Theme;

pub const STATS_KEY: &str = "stats";
pub const THEME_KEY: &str = "theme";

fn read_document<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

fn write_document<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Load career stats; missing, unreadable or malformed data yields defaults
pub fn load_stats(store: &dyn KvStore) -> CareerStats {
    match read_document(store, STATS_KEY) {
        Ok(Some(stats)) => stats,
        Ok(None) => CareerStats::default(),
        Err(e) => {
            warn!(error = %e, "failed to load stats, starting fresh");
            CareerStats::default()
        }
    }
}

/// Save career stats. Failures are logged and otherwise ignored.
pub fn save_stats(store: &mut dyn KvStore, stats: &CareerStats) {
    if let Err(e) = write_document(store, STATS_KEY, stats) {
        warn!(error = %e, "failed to save stats");
    }
}

pub fn load_theme(store: &dyn KvStore) -> Theme {
    match read_document(store, THEME_KEY) {
        Ok(Some(theme)) => theme,
        Ok(None) => Theme::default(),
        Err(e) => {
            warn!(error = %e, "failed to load theme");
            Theme::default()
        }
    }
}

pub fn save_theme(store: &mut dyn KvStore, theme: Theme) {
    if let Err(e) = write_document(store, THEME_KEY, &theme) {
        warn!(error = %e, "failed to save theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::AchievementId;

    /// Store whose every operation fails
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }
    }

    #[test]
    fn test_missing_keys_give_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_stats(&store), CareerStats::default());
        assert_eq!(load_theme(&store), Theme::Light);
    }

    #[test]
    fn test_stats_roundtrip_through_store() {
        let mut store = MemoryStore::new();
        let mut stats = CareerStats {
            wins: 3,
            losses: 1,
            draws: 1,
            total_runs: 140,
            highest_score: 61,
            wickets: 2,
            ..CareerStats::default()
        };
        stats
            .unlocked_achievement_ids
            .insert(AchievementId::HalfCentury);

        save_stats(&mut store, &stats);
        assert_eq!(load_stats(&store), stats);
    }

    #[test]
    fn test_reads_documented_format() {
        let mut store = MemoryStore::new();
        store
            .set(
                STATS_KEY,
                r#"{"wins":2,"losses":0,"draws":1,"totalRuns":75,"highestScore":50,"wickets":5,
                    "unlockedAchievementIds":["first_victory","five_wicket_haul"]}"#,
            )
            .unwrap();
        let stats = load_stats(&store);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.total_runs, 75);
        assert!(stats
            .unlocked_achievement_ids
            .contains(&AchievementId::FiveWicketHaul));
    }

    #[test]
    fn test_malformed_stats_fail_closed() {
        let mut store = MemoryStore::new();
        for raw in [
            "not json",
            r#"{"wins":-1,"losses":0,"draws":0,"totalRuns":0,"highestScore":0,"wickets":0,"unlockedAchievementIds":[]}"#,
            r#"{"wins":"many"}"#,
            r#"{"wins":1,"losses":0,"draws":0,"totalRuns":0,"highestScore":0,"wickets":0,"unlockedAchievementIds":["bogus"]}"#,
        ] {
            store.set(STATS_KEY, raw).unwrap();
            assert_eq!(load_stats(&store), CareerStats::default(), "payload {raw}");
        }
    }

    #[test]
    fn test_broken_store_is_non_fatal() {
        let mut store = BrokenStore;
        assert_eq!(load_stats(&store), CareerStats::default());
        assert_eq!(load_theme(&store), Theme::Light);
        save_stats(&mut store, &CareerStats::default());
        save_theme(&mut store, Theme::Dark);
    }

    #[test]
    fn test_theme_roundtrip() {
        let mut store = MemoryStore::new();
        save_theme(&mut store, Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("\"dark\""));
        assert_eq!(load_theme(&store), Theme::Dark);
    }
}
