//! Configuration management module
//!
//! Handles loading, saving, and validation of application settings
//! and user preferences.

use crate::{Error, Result, APP_NAME, CONFIG_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod persistence;

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Status hint shown before any column has been touched
    pub initial_hint: String,
    /// Text shown inside the greeting dialog
    pub greeting: String,
    /// Reopen the list windows saved on the previous exit
    pub restore_layout: bool,
    /// Save the open list windows on exit
    pub save_layout: bool,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250, // 4 FPS for responsive UI
            initial_hint: "init".to_string(),
            greeting: "Hello, World!".to_string(),
            restore_layout: false,
            save_layout: false,
            log_filter: "itemview=info".to_string(),
        }
    }
}

impl AppConfig {
    const MIN_TICK_RATE_MS: u64 = 10;
    const MAX_TICK_RATE_MS: u64 = 5000;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_TICK_RATE_MS..=Self::MAX_TICK_RATE_MS).contains(&self.tick_rate_ms) {
            return Err(Error::Config(format!(
                "Tick rate must be between {} and {} ms, got {}",
                Self::MIN_TICK_RATE_MS,
                Self::MAX_TICK_RATE_MS,
                self.tick_rate_ms
            )));
        }

        if self.initial_hint.contains('\n') {
            return Err(Error::Config(
                "Initial hint must fit on one line".to_string(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(Error::Config("Log filter must not be empty".to_string()));
        }

        Ok(())
    }

    /// Poll interval as a duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Set the poll interval
    pub fn with_tick_rate_ms(mut self, ms: u64) -> Self {
        self.tick_rate_ms = ms;
        self
    }

    /// Set the initial status hint
    pub fn with_initial_hint(mut self, hint: impl Into<String>) -> Self {
        self.initial_hint = hint.into();
        self
    }

    /// Set the greeting dialog text
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Set whether saved windows are reopened at startup
    pub fn with_restore_layout(mut self, restore: bool) -> Self {
        self.restore_layout = restore;
        self
    }

    /// Set whether open windows are saved on exit
    pub fn with_save_layout(mut self, save: bool) -> Self {
        self.save_layout = save;
        self
    }

    /// Set the default tracing filter
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from an explicit path
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            Error::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/itemview/itemview.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
