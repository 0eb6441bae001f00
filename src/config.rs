use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to the events JSON file
    #[serde(default = "default_events_file")]
    pub events_file: String,

    /// Filter applied when no --filter flag is given.
    /// Parsed fail-open: an unrecognized value behaves like "all".
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            events_file: default_events_file(),
            default_filter: default_filter(),
        }
    }
}

fn default_events_file() -> String {
    "~/bakeboard/events.json".to_string()
}

fn default_filter() -> String {
    "all".to_string()
}

/// Get the config file path (~/.config/bakeboard/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("bakeboard");
    Ok(config_dir.join("config.toml"))
}

/// Load config from ~/.config/bakeboard/config.toml.
/// A missing file is not an error; defaults apply.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(&path[2..]);
        }
    }
    PathBuf::from(path)
}
