//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/wallcalc/wallcalc.toml`, or an explicit `--config` file
//! 3. Environment variables: `WALLCALC_*` prefix
//! 4. Command-line flags (applied by the CLI via [`Settings::apply`])

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::DelimiterMode;

const ENV_PREFIX: &str = "WALLCALC";

/// Unified configuration for wallcalc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Field separator within a line (default: "x")
    pub delimiter: String,
    /// Whether `delimiter` is a literal or a regular expression
    pub delimiter_mode: DelimiterMode,
    /// Add the smallest face once per room for wastage (default: true)
    pub add_extra: bool,
    /// Display unit for the total, no conversion (default: "feet")
    pub unit: String,
    /// Skip blank lines instead of rejecting them (default: false)
    pub skip_blank_lines: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: "x".into(),
            delimiter_mode: DelimiterMode::Literal,
            add_extra: true,
            unit: "feet".into(),
            skip_blank_lines: false,
        }
    }
}

/// Partial settings; `None` means "not specified, keep the lower layer".
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSettings {
    pub delimiter: Option<String>,
    pub delimiter_mode: Option<DelimiterMode>,
    pub add_extra: Option<bool>,
    pub unit: Option<String>,
    pub skip_blank_lines: Option<bool>,
}

/// Get the XDG config directory for wallcalc.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wallcalc").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wallcalc.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay `raw` onto self: specified fields win, the rest is kept.
    pub fn apply(&self, raw: &RawSettings) -> Self {
        Self {
            delimiter: raw
                .delimiter
                .clone()
                .unwrap_or_else(|| self.delimiter.clone()),
            delimiter_mode: raw.delimiter_mode.unwrap_or(self.delimiter_mode),
            add_extra: raw.add_extra.unwrap_or(self.add_extra),
            unit: raw.unit.clone().unwrap_or_else(|| self.unit.clone()),
            skip_blank_lines: raw.skip_blank_lines.unwrap_or(self.skip_blank_lines),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global one and must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_prefix(config_file, ENV_PREFIX)
    }

    fn load_with_prefix(config_file: Option<&Path>, prefix: &str) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Config file
        match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ApplicationError::Config {
                        message: format!("config file not found: {}", path.display()),
                    });
                }
                current = current.apply(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        current = current.apply(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        // 3. Environment variables
        let env = Self::env_overrides(prefix)?;
        Ok(current.apply(&env))
    }

    /// Read `<PREFIX>_*` environment variables into a partial overlay.
    fn env_overrides(prefix: &str) -> Result<RawSettings, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        let mut raw = RawSettings::default();
        if let Ok(val) = config.get_string("delimiter") {
            raw.delimiter = Some(val);
        }
        if let Ok(val) = config.get_string("delimiter_mode") {
            raw.delimiter_mode = Some(parse_delimiter_mode(&val)?);
        }
        if config.get_string("add_extra").is_ok() {
            raw.add_extra = Some(config.get_bool("add_extra").map_err(config_err)?);
        }
        if let Ok(val) = config.get_string("unit") {
            raw.unit = Some(val);
        }
        if config.get_string("skip_blank_lines").is_ok() {
            raw.skip_blank_lines = Some(config.get_bool("skip_blank_lines").map_err(config_err)?);
        }
        Ok(raw)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# wallcalc configuration
#
# Locations (by precedence, lowest to highest):
#   File: ~/.config/wallcalc/wallcalc.toml  (or --config <file>)
#   Env:  WALLCALC_* environment variables
#   CLI:  command-line flags

# Field separator between length, width and height
# delimiter = "x"

# "literal" or "regex"
# delimiter_mode = "literal"

# Add the smallest face of every room once more to cover wastage
# add_extra = true

# Unit label for the total (display only, no conversion)
# unit = "feet"

# Skip blank lines instead of failing on them
# skip_blank_lines = false
"#
        .to_string()
    }
}

fn parse_delimiter_mode(value: &str) -> Result<DelimiterMode, ApplicationError> {
    match value.to_ascii_lowercase().as_str() {
        "literal" => Ok(DelimiterMode::Literal),
        "regex" => Ok(DelimiterMode::Regex),
        other => Err(ApplicationError::Config {
            message: format!("unknown delimiter_mode: {other} (expected literal or regex)"),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
