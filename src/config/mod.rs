// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Toast auto-dismiss timeout and visible stack size
//! - `[logging]` - Log level and output format
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Set `HAZARD_WATCH_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hazard_watch::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.timeout_ms = Some(8_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "HazardWatch";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "HAZARD_WATCH_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationsConfig {
    /// Auto-dismiss timeout in milliseconds.
    #[serde(default = "default_timeout_ms", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Number of toasts rendered at once.
    #[serde(default = "default_max_visible", skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_visible: default_max_visible(),
        }
    }
}

impl NotificationsConfig {
    /// Configured timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let millis = self
            .timeout_ms
            .unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
            .clamp(MIN_TOAST_TIMEOUT_MS, MAX_TOAST_TIMEOUT_MS);
        Duration::from_millis(millis)
    }

    /// Configured stack size, clamped to the supported range.
    #[must_use]
    pub fn max_visible(&self) -> usize {
        self.max_visible
            .unwrap_or(DEFAULT_MAX_VISIBLE_TOASTS)
            .clamp(MIN_MAX_VISIBLE_TOASTS, MAX_MAX_VISIBLE_TOASTS)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    /// Level directive such as `info` or `debug`. `RUST_LOG` wins over it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl LoggingConfig {
    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_timeout_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_TIMEOUT_MS)
}

fn default_max_visible() -> Option<usize> {
    Some(DEFAULT_MAX_VISIBLE_TOASTS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then environment, then platform default.
fn config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

// =============================================================================
// Save Functions
// =============================================================================

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
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
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            notifications: NotificationsConfig {
                timeout_ms: Some(8_000),
                max_visible: Some(3),
            },
            logging: LoggingConfig {
                level: Some("debug".to_string()),
                format: LogFormat::Json,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[notifications\n")
            .expect("failed to write broken toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"warn\"\n").expect("valid toml");

        assert_eq!(config.notifications, NotificationsConfig::default());
        assert_eq!(config.logging.level(), "warn");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn timeout_and_stack_size_are_clamped() {
        let config = NotificationsConfig {
            timeout_ms: Some(10),
            max_visible: Some(500),
        };
        assert_eq!(config.timeout(), Duration::from_millis(MIN_TOAST_TIMEOUT_MS));
        assert_eq!(config.max_visible(), MAX_MAX_VISIBLE_TOASTS);
    }

    #[test]
    fn default_config_uses_five_second_timeout() {
        let config = Config::default();
        assert_eq!(config.notifications.timeout(), DEFAULT_TOAST_TIMEOUT);
        assert_eq!(config.notifications.max_visible(), DEFAULT_MAX_VISIBLE_TOASTS);
        assert_eq!(config.logging.level(), DEFAULT_LOG_LEVEL);
    }
}
