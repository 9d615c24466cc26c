//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\search-tool\config.toml
//! - macOS: ~/Library/Application Support/search-tool/config.toml
//! - Linux: ~/.config/search-tool/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration: the three settings spec.md's external
/// interfaces table names, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Library root path, re-scanned on `--rescan` or startup per
    /// `rescan_on_startup`.
    pub path: Option<PathBuf>,

    /// Cap on displayed rows after a search (see `crate::query::search`).
    pub max_results: usize,

    /// Whether to kick off a rescan automatically at launch.
    pub rescan_on_startup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            max_results: 20,
            rescan_on_startup: false,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("search-tool"))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk, falling back to defaults on any
/// missing-directory, missing-file, or parse failure. This always
/// returns a usable config; callers never see the underlying error.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!(target: "config", "could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::info!(target: "config", ?path, "no config file found, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!(target: "config", ?path, "loaded config");
                config
            }
            Err(e) => {
                tracing::error!(target: "config", ?path, error = %e, "failed to parse config, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!(target: "config", ?path, error = %e, "failed to read config, using defaults");
            Config::default()
        }
    }
}

/// Persist configuration atomically (write-temp, then rename).
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!(target: "config", ?path, "saved config");
    Ok(())
}

/// Save configuration from an `iced` task without blocking the UI
/// thread.
pub async fn save_async(config: Config) -> Result<(), ConfigError> {
    tokio::task::spawn_blocking(move || save(&config))
        .await
        .map_err(|e| ConfigError::TaskJoin(e.to_string()))?
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("task join error: {0}")]
    TaskJoin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("max_results"));
    }

    #[test]
    fn config_roundtrip() {
        let mut config = Config::default();
        config.path = Some(PathBuf::from("/music"));
        config.max_results = 50;

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.path, Some(PathBuf::from("/music")));
        assert_eq!(parsed.max_results, 50);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let toml = "max_results = 10\n";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.max_results, 10);
        assert!(!config.rescan_on_startup);
        assert!(config.path.is_none());
    }
}
