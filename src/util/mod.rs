//! Utility functions module
//!
//! Contains cell geometry helpers shared by the window layout and the
//! widgets that hit-test pointer events.

pub mod geometry;

// Re-export commonly used types
pub use geometry::{CellRect, Point};
