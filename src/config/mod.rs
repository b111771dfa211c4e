// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a `settings.toml` file the user edits by hand.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[source]` - Where the speech archive is hosted
//! - `[share]` - The public page used as location and in shared links
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `NYTAARSTALE_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use nytaarstale::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("archive: {}", config.source.assets_url());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the toast shown when the config file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "da", "en-US").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Speech archive settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SourceConfig {
    /// Base URL of the archive. Documents are read from `{assets_url}assets/`.
    #[serde(default)]
    pub assets_url: Option<String>,
}

impl SourceConfig {
    /// The configured archive URL, or the default one.
    #[must_use]
    pub fn assets_url(&self) -> &str {
        self.assets_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_ASSETS_URL)
    }
}

/// Share settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct ShareConfig {
    /// Public page URL used as the initial location.
    #[serde(default)]
    pub page_url: Option<String>,
}

impl ShareConfig {
    /// The configured page URL, or the default one.
    #[must_use]
    pub fn page_url(&self) -> &str {
        self.page_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_PAGE_URL)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub share: ShareConfig,
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
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
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
                    tracing::warn!(path = %path.display(), error = %err, "using default config");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let expected = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Light,
            },
            source: SourceConfig {
                assets_url: Some("http://localhost:8080/".to_string()),
            },
            share: ShareConfig {
                page_url: Some("https://example.org/tale/".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\nlanguage = \"en-US\"\ntheme_mode = \"light\"\n\n\
             [source]\nassets_url = \"http://localhost:8080/\"\n\n\
             [share]\npage_url = \"https://example.org/tale/\"\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, expected);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general\nlanguage = ").expect("write");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn default_config_uses_public_archive() {
        let config = Config::default();
        assert_eq!(config.source.assets_url(), DEFAULT_ASSETS_URL);
        assert_eq!(config.share.page_url(), DEFAULT_PAGE_URL);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn blank_urls_fall_back_to_defaults() {
        let config: Config = toml::from_str("[source]\nassets_url = \" \"\n[share]\npage_url = \"\"\n")
            .expect("valid config");
        assert_eq!(config.source.assets_url(), DEFAULT_ASSETS_URL);
        assert_eq!(config.share.page_url(), DEFAULT_PAGE_URL);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config =
            toml::from_str("[general]\nlanguage = \"da\"\n").expect("valid config");
        assert_eq!(config.general.language.as_deref(), Some("da"));
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reads_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\nlanguage = \"da\"\n")
            .expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language.as_deref(), Some("da"));
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = [valid").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }
}
