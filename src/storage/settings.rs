//! Settings storage
//!
//! Reads user preferences from `settings.json` in the data directory.

use crate::reply::simulated::{DEFAULT_REPLY_DELAY, DEFAULT_REPLY_TEXT};
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_REPLY_DELAY_MS: u64 = 60_000;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// How long the simulated counterpart "types" before answering
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Text of every simulated reply
    #[serde(default = "default_simulated_reply")]
    pub simulated_reply: String,
    /// UI theme: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Shown on the local user's avatar
    #[serde(default = "default_user_initials")]
    pub user_initials: String,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY.as_millis() as u64
}

fn default_simulated_reply() -> String {
    DEFAULT_REPLY_TEXT.to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_user_initials() -> String {
    "JD".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            simulated_reply: default_simulated_reply(),
            theme: default_theme(),
            user_initials: default_user_initials(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Ensures all values are within acceptable ranges.
    pub fn validate(&mut self) {
        if self.reply_delay_ms > MAX_REPLY_DELAY_MS {
            tracing::warn!(
                "Reply delay {}ms too long, capping to {}ms",
                self.reply_delay_ms,
                MAX_REPLY_DELAY_MS
            );
            self.reply_delay_ms = MAX_REPLY_DELAY_MS;
        }

        if self.simulated_reply.trim().is_empty() {
            self.simulated_reply = default_simulated_reply();
        }

        if self.theme != "dark" && self.theme != "light" {
            self.theme = default_theme();
        }

        let initials: String = self.user_initials.trim().chars().take(2).collect();
        self.user_initials = if initials.is_empty() {
            default_user_initials()
        } else {
            initials.to_uppercase()
        };
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_settings_from(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Read and validate a settings file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_settings_file(contents: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, contents).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.reply_delay_ms, 2000);
        assert_eq!(settings.simulated_reply, DEFAULT_REPLY_TEXT);
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.user_initials, "JD");
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = AppSettings::default();

        settings.reply_delay_ms = 10 * 60 * 1000;
        settings.validate();
        assert_eq!(settings.reply_delay_ms, MAX_REPLY_DELAY_MS);

        settings.theme = "invalid".to_string();
        settings.validate();
        assert_eq!(settings.theme, "dark");

        settings.simulated_reply = "   ".to_string();
        settings.validate();
        assert_eq!(settings.simulated_reply, DEFAULT_REPLY_TEXT);

        settings.user_initials = " ab c".to_string();
        settings.validate();
        assert_eq!(settings.user_initials, "AB");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let (_temp_dir, path) = temp_settings_file(r#"{"reply_delay_ms": 500, "theme": "light"}"#);
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.reply_delay_ms, 500);
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.simulated_reply, DEFAULT_REPLY_TEXT);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (_temp_dir, path) = temp_settings_file("{ not json");
        assert!(matches!(load_settings_from(&path), Err(StorageError::Json(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        assert_eq!(load_settings_from(&path).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
