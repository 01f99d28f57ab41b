//! Configuration management for todolist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_PLACEHOLDER, DEFAULT_TICK_RATE_MS, DEFAULT_TIMESTAMP_FORMAT,
    DEFAULT_TITLE, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("tick_rate_ms must be between {min} and {max}, got {value}")]
    InvalidTickRate { value: u64, min: u64, max: u64 },

    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Invalid timestamp_format '{0}'")]
    InvalidTimestampFormat(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Heading shown above the input box
    pub title: String,
    /// Placeholder shown while the input is empty
    pub placeholder: String,
    /// Allow toggling items completed (false gives a plain add/remove list)
    pub allow_completion: bool,
    /// Ask before removing an item
    pub confirm_remove: bool,
    /// Event loop tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub icon_theme: IconTheme,
    /// Show when each item was added
    pub show_timestamps: bool,
    /// chrono format string for item timestamps
    pub timestamp_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file (the in-memory log view is always available)
    pub enabled: bool,
    /// Minimum level: off, error, warn, info, debug or trace
    pub level: String,
    /// Log file location, defaults to the XDG data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            allow_completion: true,
            confirm_remove: false,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            show_timestamps: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level.
    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_NAME).join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&self.ui.tick_rate_ms) {
            return Err(ConfigError::InvalidTickRate {
                value: self.ui.tick_rate_ms,
                min: MIN_TICK_RATE_MS,
                max: MAX_TICK_RATE_MS,
            });
        }

        if self.ui.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }

        self.logging.level_filter()?;

        // chrono reports bad specifiers as a fmt::Error while formatting
        // Items carry a full date, so date specifiers are valid too
        let sample = chrono::NaiveDate::from_ymd_opt(2024, 1, 31)
            .and_then(|date| date.and_hms_opt(12, 0, 0))
            .unwrap_or_default();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.display.timestamp_format)).is_err() {
            return Err(ConfigError::InvalidTimestampFormat(self.display.timestamp_format.clone()));
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# todolist configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
