//! CLI configuration

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default timestamp format for join times
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default number of friend suggestions
pub const DEFAULT_SUGGESTIONS: usize = 3;

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sociogram")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// chrono format string used to read and print join timestamps
    pub timestamp_format: String,
    /// Suggestions returned when `suggest` is given no `--max`
    pub default_suggestions: usize,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            default_suggestions: DEFAULT_SUGGESTIONS,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults if the file is missing
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        check_timestamp_format(&config.timestamp_format)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["timestamp_format", "default_suggestions", "format"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "timestamp_format" => Some(self.timestamp_format.clone()),
            "default_suggestions" => Some(self.default_suggestions.to_string()),
            "format" => Some(self.format.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "timestamp_format" => {
                check_timestamp_format(value)?;
                self.timestamp_format = value.to_string();
            }
            "default_suggestions" => {
                let count: usize = value
                    .parse()
                    .with_context(|| format!("Not a number: {}", value))?;
                sociogram_core::limits::validate_suggestion_count(count)?;
                self.default_suggestions = count;
            }
            "format" => self.format = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

/// A usable format must print a timestamp it can read back unchanged
fn check_timestamp_format(format: &str) -> anyhow::Result<()> {
    let sample: NaiveDateTime = NaiveDate::from_ymd_opt(2024, 5, 29)
        .and_then(|d| d.and_hms_opt(10, 30, 15))
        .context("sample timestamp")?;
    let mut printed = String::new();
    if write!(printed, "{}", sample.format(format)).is_err() {
        anyhow::bail!("Invalid timestamp format {:?}", format);
    }
    match NaiveDateTime::parse_from_str(&printed, format) {
        Ok(parsed) if parsed == sample => Ok(()),
        _ => anyhow::bail!(
            "Timestamp format {:?} cannot round-trip a full date and time",
            format
        ),
    }
}
