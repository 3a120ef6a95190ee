// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Catalog location, startup tab and filter memory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `COMMITTEE_GALLERY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use committee_gallery::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::catalog::EventFilter;
use crate::error::{Error, Result};
use crate::gallery::Tab;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Catalog file to show instead of the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Tab selected at startup.
    #[serde(default)]
    pub default_tab: Tab,

    /// Restore the last used event filter at startup.
    #[serde(default = "default_remember_filter")]
    pub remember_filter: bool,

    /// Last event filter, kept as a raw string so unknown values degrade to
    /// "all" instead of rejecting the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_filter: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_tab: Tab::default(),
            remember_filter: DEFAULT_REMEMBER_FILTER,
            last_filter: None,
        }
    }
}

impl GalleryConfig {
    /// Filter to start with, honoring `remember_filter`.
    #[must_use]
    pub fn startup_filter(&self) -> EventFilter {
        match (&self.last_filter, self.remember_filter) {
            (Some(name), true) => EventFilter::from_name_or_all(name),
            _ => EventFilter::All,
        }
    }

    /// Records `filter` as the last one used. Returns `false` if nothing changed.
    pub fn remember(&mut self, filter: EventFilter) -> bool {
        if !self.remember_filter {
            return false;
        }
        let name = filter_name(filter);
        if self.last_filter.as_deref() == Some(name) {
            return false;
        }
        self.last_filter = Some(name.to_string());
        true
    }
}

fn filter_name(filter: EventFilter) -> &'static str {
    match filter {
        EventFilter::All => "all",
        EventFilter::Past => "past",
        EventFilter::Upcoming => "upcoming",
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_remember_filter() -> bool {
    DEFAULT_REMEMBER_FILTER
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

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            gallery: GalleryConfig {
                catalog_path: Some(PathBuf::from("/srv/committee/catalog.toml")),
                default_tab: Tab::Videos,
                remember_filter: true,
                last_filter: Some("upcoming".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").unwrap();

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"Dark\"\n").unwrap();

        let config = load_from_path(&config_path).expect("config loads");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").unwrap();

        let config = load_from_path(&config_path).expect("config loads");
        assert_eq!(config.gallery, GalleryConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.gallery.default_tab, Tab::Events);
        assert!(config.gallery.remember_filter);
        assert_eq!(config.gallery.startup_filter(), EventFilter::All);
    }

    #[test]
    fn startup_filter_honors_remember_flag() {
        let mut gallery = GalleryConfig {
            last_filter: Some("past".to_string()),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.startup_filter(), EventFilter::Past);

        gallery.remember_filter = false;
        assert_eq!(gallery.startup_filter(), EventFilter::All);
    }

    #[test]
    fn unknown_last_filter_degrades_to_all() {
        let gallery = GalleryConfig {
            last_filter: Some("archived".to_string()),
            ..GalleryConfig::default()
        };
        assert_eq!(gallery.startup_filter(), EventFilter::All);
    }

    #[test]
    fn remember_reports_changes_only() {
        let mut gallery = GalleryConfig::default();
        assert!(gallery.remember(EventFilter::Upcoming));
        assert!(!gallery.remember(EventFilter::Upcoming));
        assert_eq!(gallery.last_filter.as_deref(), Some("upcoming"));

        gallery.remember_filter = false;
        assert!(!gallery.remember(EventFilter::Past));
        assert_eq!(gallery.last_filter.as_deref(), Some("upcoming"));
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
            gallery: GalleryConfig {
                default_tab: Tab::Magazine,
                ..GalleryConfig::default()
            },
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_missing_file_is_silent_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\n").unwrap();

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }
}
