//! Layout persistence module
//!
//! Versioned records for column viewers and list windows, plus storage of
//! the desktop layout between runs.

use crate::models::ColumnKind;
use crate::util::CellRect;
use crate::{Error, Result, APP_NAME, LAYOUT_FILE, RECORD_VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Persisted state of one column viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerRecord {
    pub version: u32,
    pub kind: ColumnKind,
    pub label: String,
    pub lines: Vec<String>,
    pub selected: usize,
}

impl ViewerRecord {
    /// Encode the record onto a stream
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Decode a record from a stream
    pub fn read_from<R: Read>(reader: R) -> Result<Self> {
        let record: Self = serde_json::from_reader(reader)?;
        check_version("viewer", record.version)?;
        Ok(record)
    }
}

/// Persisted state of one list window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub version: u32,
    pub title: String,
    pub number: u16,
    pub bounds: CellRect,
    pub focused: usize,
    pub viewers: Vec<ViewerRecord>,
}

impl WindowRecord {
    /// Check the version and the column count of a decoded record
    pub fn validate(&self) -> Result<()> {
        check_version("window", self.version)?;
        if self.viewers.len() != ColumnKind::ALL.len() {
            return Err(Error::Persistence(format!(
                "Window '{}' has {} columns, expected {}",
                self.title,
                self.viewers.len(),
                ColumnKind::ALL.len()
            )));
        }
        for viewer in &self.viewers {
            check_version("viewer", viewer.version)?;
        }
        Ok(())
    }
}

/// Persisted set of open list windows, back to front
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopLayout {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub windows: Vec<WindowRecord>,
}

impl Default for DesktopLayout {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl DesktopLayout {
    pub fn new(windows: Vec<WindowRecord>) -> Self {
        Self {
            version: RECORD_VERSION,
            saved_at: Utc::now(),
            windows,
        }
    }
}

fn check_version(what: &str, version: u32) -> Result<()> {
    if version != RECORD_VERSION {
        return Err(Error::Persistence(format!(
            "Unsupported {} record version {} (expected {})",
            what, version, RECORD_VERSION
        )));
    }
    Ok(())
}

/// Desktop layout storage manager
#[derive(Debug)]
pub struct LayoutStorage {
    layout_path: PathBuf,
}

impl LayoutStorage {
    /// Create a storage manager at the standard location
    pub fn new() -> Result<Self> {
        let layout_path = Self::layout_file_path()?;
        Ok(Self { layout_path })
    }

    /// Create a storage manager backed by an explicit file
    pub fn with_path(layout_path: PathBuf) -> Self {
        Self { layout_path }
    }

    /// Get the standard layout file path
    /// Uses $DATA_HOME/itemview/layout.json
    pub fn layout_file_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            Error::Config("Unable to determine data directory".to_string())
        })?;

        Ok(data_dir.join(APP_NAME).join(LAYOUT_FILE))
    }

    /// Load the saved layout; an absent file yields an empty layout
    pub fn load(&self) -> Result<DesktopLayout> {
        if !self.layout_path.exists() {
            return Ok(DesktopLayout::default());
        }

        let content = fs::read_to_string(&self.layout_path).map_err(|e| {
            Error::Persistence(format!(
                "Failed to read layout file {}: {}",
                self.layout_path.display(),
                e
            ))
        })?;

        let layout: DesktopLayout = serde_json::from_str(&content).map_err(|e| {
            Error::Persistence(format!(
                "Failed to parse layout file {}: {}",
                self.layout_path.display(),
                e
            ))
        })?;

        check_version("layout", layout.version)?;
        for window in &layout.windows {
            window.validate()?;
        }

        Ok(layout)
    }

    /// Replace the saved layout
    pub fn save(&self, layout: &DesktopLayout) -> Result<()> {
        if let Some(parent) = self.layout_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Persistence(format!(
                    "Failed to create layout directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(layout)?;

        fs::write(&self.layout_path, content).map_err(|e| {
            Error::Persistence(format!(
                "Failed to write layout file {}: {}",
                self.layout_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}
