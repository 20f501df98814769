// Hand cricket configuration types
// Every section falls back to its defaults when missing from the file

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub commentary: CommentaryConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    // Difficulty highlighted first: "easy", "medium", "hard"
    pub default_difficulty: String,

    // How long both hands stay revealed before the next ball is accepted
    pub reveal_delay_ms: u64,

    // Fixed RNG seed for reproducible matches (omit for a random seed)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_difficulty: "medium".to_string(),
            reveal_delay_ms: 900,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { target_fps: 30 }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    // Directory for stats.json and theme.json (default: platform data dir)
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CommentaryConfig {
    // Text-generation endpoint; local commentary is used when unset
    pub endpoint: Option<String>,

    // Environment variable holding the bearer token for the endpoint
    pub api_key_env: String,

    // Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key_env: "HANDCRICKET_COMMENTARY_KEY".to_string(),
            timeout_secs: 8,
        }
    }
}
