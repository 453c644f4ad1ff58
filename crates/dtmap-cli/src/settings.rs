//! Client settings - load from disk.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.dtmap.dtmap/settings.toml
//! - Windows: %APPDATA%/dtmap/dtmap/config/settings.toml
//! - Linux: ~/.config/dtmap/settings.toml
//!
//! Command-line flags take precedence over anything read here.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "dtmap";
const APP_NAME: &str = "dtmap";
const CONFIG_FILENAME: &str = "settings.toml";

/// Address of a backend started with its development server defaults.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Client settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub polling: PollingSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the mapping backend.
    pub base_url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingSettings {
    /// Delay between progress polls, in milliseconds.
    pub interval_ms: u64,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

impl PollingSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory CSV exports are written to (current directory when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Get the path to the default settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from an explicit file. A missing or malformed file is an error.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings = toml::from_str(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    tracing::debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Load settings from the default location.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be read or parsed
/// - The platform-specific directory cannot be determined
pub fn load_default_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_or_default(&path)
}

fn load_or_default(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.polling.interval(), Duration::from_secs(1));
        assert!(settings.export.directory.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[polling]\ninterval_ms = 250\n").unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.polling.interval_ms, 250);
        assert_eq!(settings.server.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_malformed_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "polling = [").unwrap();

        assert_eq!(load_or_default(&path), Settings::default());
        assert!(load_settings_from(&path).is_err());
    }

    #[test]
    fn test_missing_default_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_or_default(&dir.path().join(CONFIG_FILENAME)),
            Settings::default()
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.export.directory = Some(PathBuf::from("exports"));
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }
}
