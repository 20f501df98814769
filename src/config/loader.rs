// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("handcricket");
    path.push("config.toml");
    path
}

/// Load configuration from file, or create default if it doesn't exist
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<Config, io::Error> {
    if config_path.exists() {
        let contents = fs::read_to_string(config_path)?;
        Ok(parse_config(&contents))
    } else {
        create_default_config(config_path)?;
        Ok(Config::default())
    }
}

/// Parse config text, falling back to defaults on any error
pub fn parse_config(contents: &str) -> Config {
    match toml::from_str(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to parse config file, using defaults");
            Config::default()
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    // Add helpful header comments
    let commented_toml = format!(
        "# Hand Cricket Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Difficulties: \"easy\", \"medium\", \"hard\"\n\
         # game.seed = 1234          fixes the random sequence\n\
         # storage.data_dir = \"...\"  moves stats.json and theme.json\n\
         # commentary.endpoint = \"https://...\"  enables generated commentary\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)?;
    info!(path = %path.display(), "created default config file");
    Ok(())
}
