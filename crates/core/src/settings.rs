//! Optional user settings loaded from `playground.toml`.
//!
//! The file is looked up in a single directory and every key is
//! optional; a missing file yields the defaults. Only simulation pacing
//! is configurable today.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tokio::time::Duration;

use crate::simulation::Timings;

/// Settings file name looked up in the provided directory.
pub const SETTINGS_FILE: &str = "playground.toml";

/// Errors raised while loading the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file exists but could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    FileRead { path: PathBuf, source: io::Error },

    /// The file exists but is not valid TOML for the expected shape.
    #[error("Failed to parse settings file {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level settings shape.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub simulation: TimingSettings,
}

/// Simulation pacing overrides, all in milliseconds.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TimingSettings {
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,
    #[serde(default = "default_user_typing_ms")]
    pub user_typing_ms: u64,
    #[serde(default = "default_assistant_typing_ms")]
    pub assistant_typing_ms: u64,
    #[serde(default = "default_between_ms")]
    pub between_ms: u64,
}

fn default_initial_ms() -> u64 {
    300
}

fn default_user_typing_ms() -> u64 {
    500
}

fn default_assistant_typing_ms() -> u64 {
    1500
}

fn default_between_ms() -> u64 {
    400
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            initial_ms: default_initial_ms(),
            user_typing_ms: default_user_typing_ms(),
            assistant_typing_ms: default_assistant_typing_ms(),
            between_ms: default_between_ms(),
        }
    }
}

impl TimingSettings {
    /// Convert the millisecond values into runtime pacing.
    pub fn to_timings(&self) -> Timings {
        Timings {
            initial: Duration::from_millis(self.initial_ms),
            user_typing: Duration::from_millis(self.user_typing_ms),
            assistant_typing: Duration::from_millis(self.assistant_typing_ms),
            between: Duration::from_millis(self.between_ms),
        }
    }
}

/// Load settings from `<root>/playground.toml`.
///
/// A missing file is not an error; defaults are returned.
pub fn load_settings(root: &Path) -> Result<Settings, SettingsError> {
    let path = root.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| SettingsError::FileRead {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::TomlParse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "[simulation]\nassistant_typing_ms = 100\n",
        )
        .unwrap();

        let settings = load_settings(dir.path()).unwrap();
        assert_eq!(settings.simulation.assistant_typing_ms, 100);
        assert_eq!(settings.simulation.initial_ms, 300);
        assert_eq!(settings.simulation.user_typing_ms, 500);
        assert_eq!(settings.simulation.between_ms, 400);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "simulation = nope").unwrap();

        let result = load_settings(dir.path());
        assert!(matches!(result, Err(SettingsError::TomlParse { .. })));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "[simulation]\ntypo_ms = 5\n",
        )
        .unwrap();

        assert!(load_settings(dir.path()).is_err());
    }

    #[test]
    fn test_to_timings_conversion() {
        let settings = TimingSettings {
            initial_ms: 1,
            user_typing_ms: 2,
            assistant_typing_ms: 3,
            between_ms: 4,
        };
        let timings = settings.to_timings();
        assert_eq!(timings.initial, Duration::from_millis(1));
        assert_eq!(timings.between, Duration::from_millis(4));
    }

    #[test]
    fn test_default_matches_builtin_pacing() {
        assert_eq!(TimingSettings::default().to_timings(), Timings::default());
    }
}
