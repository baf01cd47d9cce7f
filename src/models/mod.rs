//! Data models module
//!
//! Contains the column kinds shown by the list window and the data
//! sources that feed lines into each column.

pub mod column;

// Re-export commonly used types
pub use column::{ColumnKind, LineSource, PlaceholderSource, VecSource};
