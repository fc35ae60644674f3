// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[showcase]` - Rotation timing (advance period, resume cooldown, counters)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `BETESEB_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use beteseb::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("am".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

// Re-export all default constants for backward compatibility
pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::rotation::RotationConfig;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "am").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Showcase rotation timing settings.
///
/// All values are stored in milliseconds and clamped to the documented
/// bounds when read, so a hand-edited config file cannot freeze or
/// flood the rotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    /// Interval between automatic advances.
    #[serde(
        default = "default_advance_period_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub advance_period_ms: Option<u64>,

    /// Cooldown after a manual selection before auto-advance resumes.
    #[serde(
        default = "default_resume_cooldown_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_cooldown_ms: Option<u64>,

    /// Duration of the stat counter count-up animation.
    #[serde(
        default = "default_counter_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub counter_duration_ms: Option<u64>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            advance_period_ms: default_advance_period_ms(),
            resume_cooldown_ms: default_resume_cooldown_ms(),
            counter_duration_ms: default_counter_duration_ms(),
        }
    }
}

impl ShowcaseConfig {
    /// Effective advance period, clamped to the documented bounds.
    pub fn advance_period(&self) -> Duration {
        let ms = self
            .advance_period_ms
            .unwrap_or(DEFAULT_ADVANCE_PERIOD_MS)
            .clamp(MIN_ADVANCE_PERIOD_MS, MAX_ADVANCE_PERIOD_MS);
        Duration::from_millis(ms)
    }

    /// Effective resume cooldown, clamped to the documented bounds.
    pub fn resume_cooldown(&self) -> Duration {
        let ms = self
            .resume_cooldown_ms
            .unwrap_or(DEFAULT_RESUME_COOLDOWN_MS)
            .clamp(MIN_RESUME_COOLDOWN_MS, MAX_RESUME_COOLDOWN_MS);
        Duration::from_millis(ms)
    }

    /// Effective counter animation duration, clamped to the documented bounds.
    pub fn counter_duration(&self) -> Duration {
        let ms = self
            .counter_duration_ms
            .unwrap_or(DEFAULT_COUNTER_DURATION_MS)
            .clamp(MIN_COUNTER_DURATION_MS, MAX_COUNTER_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Timing parameters for a rotation controller.
    pub fn rotation_config(&self) -> RotationConfig {
        RotationConfig {
            advance_period: self.advance_period(),
            resume_cooldown: self.resume_cooldown(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Showcase rotation timing settings.
    #[serde(default)]
    pub showcase: ShowcaseConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_advance_period_ms() -> Option<u64> {
    Some(DEFAULT_ADVANCE_PERIOD_MS)
}

fn default_resume_cooldown_ms() -> Option<u64> {
    Some(DEFAULT_RESUME_COOLDOWN_MS)
}

fn default_counter_duration_ms() -> Option<u64> {
    Some(DEFAULT_COUNTER_DURATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("am".to_string()),
                theme_mode: ThemeMode::Light,
            },
            showcase: ShowcaseConfig {
                advance_period_ms: Some(6000),
                resume_cooldown_ms: Some(12_000),
                counter_duration_ms: Some(1500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language, config.general.language);
        assert_eq!(loaded.general.theme_mode, config.general.theme_mode);
        assert_eq!(loaded.showcase.advance_period_ms, Some(6000));
        assert_eq!(loaded.showcase.resume_cooldown_ms, Some(12_000));
        assert_eq!(loaded.showcase.counter_duration_ms, Some(1500));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.showcase.advance_period_ms,
            Some(DEFAULT_ADVANCE_PERIOD_MS)
        );
        assert_eq!(
            config.showcase.resume_cooldown_ms,
            Some(DEFAULT_RESUME_COOLDOWN_MS)
        );
        assert_eq!(
            config.showcase.counter_duration_ms,
            Some(DEFAULT_COUNTER_DURATION_MS)
        );
    }

    #[test]
    fn missing_showcase_values_fall_back_to_defaults() {
        let showcase = ShowcaseConfig {
            advance_period_ms: None,
            resume_cooldown_ms: None,
            counter_duration_ms: None,
        };
        assert_eq!(
            showcase.advance_period(),
            Duration::from_millis(DEFAULT_ADVANCE_PERIOD_MS)
        );
        assert_eq!(
            showcase.resume_cooldown(),
            Duration::from_millis(DEFAULT_RESUME_COOLDOWN_MS)
        );
        assert_eq!(
            showcase.counter_duration(),
            Duration::from_millis(DEFAULT_COUNTER_DURATION_MS)
        );
    }

    #[test]
    fn out_of_bounds_showcase_values_are_clamped() {
        let showcase = ShowcaseConfig {
            advance_period_ms: Some(1),
            resume_cooldown_ms: Some(u64::MAX),
            counter_duration_ms: Some(0),
        };
        assert_eq!(
            showcase.advance_period(),
            Duration::from_millis(MIN_ADVANCE_PERIOD_MS)
        );
        assert_eq!(
            showcase.resume_cooldown(),
            Duration::from_millis(MAX_RESUME_COOLDOWN_MS)
        );
        assert_eq!(
            showcase.counter_duration(),
            Duration::from_millis(MIN_COUNTER_DURATION_MS)
        );
    }

    #[test]
    fn rotation_config_carries_clamped_periods() {
        let showcase = ShowcaseConfig {
            advance_period_ms: Some(2500),
            resume_cooldown_ms: Some(5000),
            counter_duration_ms: None,
        };
        let rotation = showcase.rotation_config();
        assert_eq!(rotation.advance_period, Duration::from_millis(2500));
        assert_eq!(rotation.resume_cooldown, Duration::from_millis(5000));
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let content = r#"
[general]
theme_mode = "Dark"
"#;
        let config: Config = toml::from_str(content).expect("should parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let content = r#"
[general]
theme_mode = "sepia"
"#;
        assert!(toml::from_str::<Config>(content).is_err());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            showcase: ShowcaseConfig {
                advance_period_ms: Some(3000),
                ..ShowcaseConfig::default()
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.showcase.advance_period_ms, Some(3000));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(
            warning.unwrap(),
            "notification-config-load-error".to_string()
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn multiple_isolated_config_tests_dont_interfere() {
        let temp_dir_a = tempdir().expect("create temp dir A");
        let config_a = Config {
            general: GeneralConfig {
                language: Some("am".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_a, Some(temp_dir_a.path().to_path_buf()))
            .expect("save A should succeed");

        let temp_dir_b = tempdir().expect("create temp dir B");
        let config_b = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        save_with_override(&config_b, Some(temp_dir_b.path().to_path_buf()))
            .expect("save B should succeed");

        let (loaded_a, _) = load_with_override(Some(temp_dir_a.path().to_path_buf()));
        let (loaded_b, _) = load_with_override(Some(temp_dir_b.path().to_path_buf()));

        assert_eq!(loaded_a.general.language, Some("am".to_string()));
        assert_eq!(loaded_b.general.language, Some("en-US".to_string()));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");

        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("[showcase]"),
            "should have [showcase] section"
        );
    }
}
