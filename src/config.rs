//! Tool configuration module.
//!
//! Handles loading and validating an optional `hu.toml` placed in the project
//! root (the Hugo site root). Every key is optional; a missing file means stock
//! defaults. Command-line flags override whatever the file says.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! content_dir = "content"   # Content directory, relative to the project root
//!
//! [svg]
//! width = 1200              # Preview image width in px
//! height = 630              # Preview image height in px
//! background = "#f3f4f6"    # Background fill
//! foreground = "#0b1220"    # Text fill
//! frontmatter = "yaml"      # "yaml" or "key-value"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "hu.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `hu.toml`.
///
/// All fields have defaults matching the command-line defaults. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Content directory, resolved against the project root when relative.
    pub content_dir: String,
    /// Social preview image settings.
    pub svg: SvgConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".to_string(),
            svg: SvgConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_dir must not be empty".into(),
            ));
        }
        if self.svg.width == 0 || self.svg.height == 0 {
            return Err(ConfigError::Validation(
                "svg.width and svg.height must be non-zero".into(),
            ));
        }
        if self.svg.background.trim().is_empty() || self.svg.foreground.trim().is_empty() {
            return Err(ConfigError::Validation(
                "svg.background and svg.foreground must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Social preview image settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SvgConfig {
    pub width: u32,
    pub height: u32,
    /// Background fill (any SVG color value).
    pub background: String,
    /// Text fill (any SVG color value).
    pub foreground: String,
    /// Which frontmatter parser the generator is built with.
    pub frontmatter: FrontmatterMode,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            background: "#f3f4f6".to_string(),
            foreground: "#0b1220".to_string(),
            frontmatter: FrontmatterMode::Yaml,
        }
    }
}

/// Frontmatter parser selection.
///
/// - `yaml`: full YAML parsing, falling back to key-value lines when the block
///   is not a YAML mapping
/// - `key-value`: only the line-oriented parser for the fixed key set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrontmatterMode {
    #[default]
    Yaml,
    KeyValue,
}

/// Load config from `hu.toml` in the given directory.
///
/// Returns stock defaults if the file doesn't exist. Returns `Err` if the file
/// exists but is unreadable, contains invalid TOML or unknown keys, or fails
/// validation.
pub fn load_config(root: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ToolConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ToolConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `hu.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# hu Configuration
# ================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Place this file in the Hugo project
# root as hu.toml. Command-line flags take precedence over these values.
# Unknown keys will cause an error.

# Content directory. Relative paths are resolved against the project root.
content_dir = "content"

# ---------------------------------------------------------------------------
# Social preview images (hu svg)
# ---------------------------------------------------------------------------
[svg]
# Canvas size in pixels. 1200x630 is the common Open Graph size.
width = 1200
height = 630

# Fill colors. Any SVG color value works (hex, rgb(), named colors).
background = "#f3f4f6"
foreground = "#0b1220"

# Frontmatter parser:
#   "yaml"      - full YAML, falls back to simple key: value lines
#   "key-value" - only title, seoTitle, description, summary and layout
frontmatter = "yaml"
"##
}
