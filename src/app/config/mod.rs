// SPDX-License-Identifier: MPL-2.0
//! Loading and saving user preferences in `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[images]` - Directory holding the status artwork
//! - `[status]` - Status icon background and size
//! - `[fonts]` - Button, display and input fonts
//! - `[logging]` - Log level, output format and history length
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` or the `ICED_STATUS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_status::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.status.background = Some("#202020".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use crate::ui::fonts::{
    FontRegistry, FontSettings, DEFAULT_BUTTON_FONT, DEFAULT_DISPLAY_FONT, DEFAULT_INPUT_FONT,
};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Where status artwork lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImagesConfig {
    /// Directory the built-in catalog is resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl ImagesConfig {
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR))
    }
}

/// Status icon appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusConfig {
    /// Background color as `#rrggbb`.
    #[serde(
        default = "default_status_background",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<String>,

    /// Icon edge length in pixels.
    #[serde(default = "default_icon_size", skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<u32>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            background: default_status_background(),
            icon_size: default_icon_size(),
        }
    }
}

impl StatusConfig {
    /// Parsed background, or white when missing or malformed.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background
            .as_deref()
            .and_then(parse_hex_color)
            .unwrap_or(Color::WHITE)
    }

    #[must_use]
    pub fn icon_size(&self) -> u32 {
        self.icon_size
            .unwrap_or(DEFAULT_ICON_SIZE)
            .clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
    }
}

/// The three named fonts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FontsConfig {
    #[serde(default = "default_button_font")]
    pub button: FontSettings,
    #[serde(default = "default_display_font")]
    pub display: FontSettings,
    #[serde(default = "default_input_font")]
    pub input: FontSettings,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            button: DEFAULT_BUTTON_FONT,
            display: DEFAULT_DISPLAY_FONT,
            input: DEFAULT_INPUT_FONT,
        }
    }
}

impl FontsConfig {
    #[must_use]
    pub fn registry(&self) -> FontRegistry {
        FontRegistry::new(self.button, self.display, self.input)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub fonts: FontsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_status_background() -> Option<String> {
    Some(DEFAULT_STATUS_BACKGROUND.to_string())
}

fn default_icon_size() -> Option<u32> {
    Some(DEFAULT_ICON_SIZE)
}

fn default_button_font() -> FontSettings {
    DEFAULT_BUTTON_FONT
}

fn default_display_font() -> FontSettings {
    DEFAULT_DISPLAY_FONT
}

fn default_input_font() -> FontSettings {
    DEFAULT_INPUT_FONT
}

/// Parses `#rrggbb` (the leading `#` is optional).
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgb8(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
    ))
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
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {err}", path.display())),
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
    use crate::logging::{LogFormat, LogLevel};
    use crate::ui::fonts::FontFamily;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            images: ImagesConfig {
                base_dir: Some(PathBuf::from("/opt/panel/images")),
            },
            status: StatusConfig {
                background: Some("#102030".to_string()),
                icon_size: Some(32),
            },
            fonts: FontsConfig {
                input: FontSettings::new(FontFamily::Serif, 11.0, true),
                ..FontsConfig::default()
            },
            logging: LoggingConfig {
                level: LogLevel::Debug,
                format: LogFormat::Json,
                history: 50,
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
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_reports_unreadable_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[status]\nicon_size = \"big\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            "[fonts.display]\nfamily = \"monospace\"\nsize = 20.0\n\n[logging]\nformat = \"compact\"",
        )
        .expect("valid toml");

        assert_eq!(config.fonts.display.family, FontFamily::Monospace);
        assert_eq!(config.fonts.button, DEFAULT_BUTTON_FONT);
        assert_eq!(config.status.icon_size(), DEFAULT_ICON_SIZE);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.status.background_color(), Color::WHITE);
        assert_eq!(config.status.icon_size(), DEFAULT_ICON_SIZE);
        assert_eq!(config.images.base_dir(), PathBuf::from(DEFAULT_IMAGES_DIR));
    }

    #[test]
    fn icon_size_is_clamped() {
        let status = StatusConfig {
            icon_size: Some(1),
            ..StatusConfig::default()
        };
        assert_eq!(status.icon_size(), MIN_ICON_SIZE);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#000000"), Some(Color::BLACK));
        assert_eq!(parse_hex_color("ff0000"), Some(Color::from_rgb8(255, 0, 0)));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn malformed_background_falls_back_to_white() {
        let status = StatusConfig {
            background: Some("teal".to_string()),
            ..StatusConfig::default()
        };
        assert_eq!(status.background_color(), Color::WHITE);
    }
}
