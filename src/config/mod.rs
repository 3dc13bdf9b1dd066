// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use alert_queue::alert::DisplayBehavior;
//! use alert_queue::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_behavior = Some(DisplayBehavior::Passive);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::{
    DEFAULT_ANIMATED, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DIAGNOSTICS_CHANNEL_CAPACITY,
    MAX_DIAGNOSTICS_BUFFER_CAPACITY, MIN_DIAGNOSTICS_BUFFER_CAPACITY,
};

use crate::alert::DisplayBehavior;
use crate::domain::diagnostics::BufferCapacity;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AlertQueue";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ALERT_QUEUE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Behavior used when a caller does not pick one explicitly.
    #[serde(default)]
    pub default_behavior: Option<DisplayBehavior>,
    /// Animate dismissals the controller starts on its own.
    #[serde(default)]
    pub animated: Option<bool>,
    #[serde(default)]
    pub diagnostics_buffer_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_behavior: Some(DisplayBehavior::default()),
            animated: Some(DEFAULT_ANIMATED),
            diagnostics_buffer_capacity: Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
        }
    }
}

impl Config {
    #[must_use]
    pub fn behavior(&self) -> DisplayBehavior {
        self.default_behavior.unwrap_or_default()
    }

    #[must_use]
    pub fn animated(&self) -> bool {
        self.animated.unwrap_or(DEFAULT_ANIMATED)
    }

    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::from(self.diagnostics_buffer_capacity)
    }
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a settings file. A file that does not parse yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_behavior() {
        let config = Config {
            default_behavior: Some(DisplayBehavior::DiscardAll),
            animated: Some(false),
            diagnostics_buffer_capacity: Some(64),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_use_accessor_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "animated = false\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(!loaded.animated());
        assert_eq!(loaded.behavior(), DisplayBehavior::Default);
        assert_eq!(loaded.buffer_capacity(), BufferCapacity::default());
    }

    #[test]
    fn behavior_is_written_in_snake_case() {
        let config = Config {
            default_behavior: Some(DisplayBehavior::DiscardAll),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).expect("serialization should succeed");
        assert!(text.contains("default_behavior = \"discard_all\""));
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_config_animates_with_default_behavior() {
        let config = Config::default();
        assert_eq!(config.animated, Some(true));
        assert_eq!(config.default_behavior, Some(DisplayBehavior::Default));
    }
}
