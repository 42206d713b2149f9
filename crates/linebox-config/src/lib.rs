//! linebox configuration
//!
//! Settings for the `linebox` tool, loaded from `linebox.toml` with
//! environment variable overrides. Every field has a default, so a missing
//! file or a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "linebox.toml";

/// Errors from loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineboxConfig {
    /// Font and line metrics
    pub text: TextConfig,
    /// Line breaking and flow
    pub layout: LayoutConfig,
}

/// Text metrics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to a font file (.ttf/.otf); `None` tries the system sans-serif
    pub font: Option<PathBuf>,
    /// Font size in pixels
    pub font_size: f32,
    /// Use a fixed per-character advance instead of a real font
    pub fixed_advance: Option<f32>,
    /// Explicit line height in pixels
    pub line_height: Option<f32>,
}

/// Which characters count as break opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakRule {
    /// Spaces, tabs, newlines and ideographs
    #[default]
    Whitespace,
    /// UAX #14 line break opportunities
    Unicode,
}

/// `white-space` handling for the laid out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpaceMode {
    #[default]
    Normal,
    Nowrap,
    Pre,
}

/// Layout configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Available line width in pixels; unset never wraps
    pub width: Option<f32>,
    pub white_space: WhiteSpaceMode,
    pub break_rule: BreakRule,
    /// Text is already in visual order (no reversed runs)
    pub visually_ordered: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            font_size: 16.0,
            fixed_advance: None,
            line_height: None,
        }
    }
}

impl LineboxConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `linebox.toml` from the current directory, or defaults if it
    /// can't be read
    pub fn load_or_default() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE).unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("LINEBOX_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Some(size) = env_f32("LINEBOX_FONT_SIZE") {
            self.text.font_size = size;
        }
        if let Some(width) = env_f32("LINEBOX_WIDTH") {
            self.layout.width = Some(width);
        }
        if let Ok(val) = std::env::var("LINEBOX_VISUALLY_ORDERED") {
            self.layout.visually_ordered = val == "1" || val.eq_ignore_ascii_case("true");
        }
    }

    /// Load from `linebox.toml` (or defaults), then apply environment
    /// overrides
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn env_f32(key: &str) -> Option<f32> {
    std::env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LineboxConfig::default();
        assert_eq!(config.text.font_size, 16.0);
        assert_eq!(config.layout.width, None);
        assert_eq!(config.layout.white_space, WhiteSpaceMode::Normal);
        assert_eq!(config.layout.break_rule, BreakRule::Whitespace);
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = LineboxConfig::default();
        config.layout.width = Some(120.0);
        config.layout.break_rule = BreakRule::Unicode;
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: LineboxConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = LineboxConfig::from_toml_str("[layout]\nwhite_space = \"pre\"\n").unwrap();
        assert_eq!(config.layout.white_space, WhiteSpaceMode::Pre);
        assert_eq!(config.text.font_size, 16.0);
    }

    #[test]
    fn test_unknown_white_space_is_a_parse_error() {
        let err = LineboxConfig::from_toml_str("[layout]\nwhite_space = \"wrap\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_merge_with_env() {
        unsafe {
            std::env::set_var("LINEBOX_WIDTH", "200");
            std::env::set_var("LINEBOX_FONT_SIZE", "not a number");
        }

        let mut config = LineboxConfig::default();
        config.merge_with_env();

        assert_eq!(config.layout.width, Some(200.0));
        assert_eq!(config.text.font_size, 16.0);

        unsafe {
            std::env::remove_var("LINEBOX_WIDTH");
            std::env::remove_var("LINEBOX_FONT_SIZE");
        }
    }
}
