//! ITEMVIEW - Multi-column list browser
//!
//! A terminal application hosting a greeting dialog and a window that
//! browses three parallel columns (items, categories, weights) side by side.

use thiserror::Error;

// Public re-exports
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// Layout or viewer state could not be encoded or decoded
    #[error("Persistence error: {0}")]
    Persistence(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for ITEMVIEW operations
pub type Result<T> = std::result::Result<T, Error>;

// Common types and constants
pub const APP_NAME: &str = "itemview";
pub const CONFIG_FILE: &str = "itemview.toml";
pub const LAYOUT_FILE: &str = "layout.json";
pub const LOG_FILE: &str = "itemview.log";
/// Schema version written into every persisted record
pub const RECORD_VERSION: u32 = 1;
