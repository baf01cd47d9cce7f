//! Column kinds and line sources
//!
//! The list window shows three parallel columns of one logical record set.
//! Content is pulled through [`LineSource`] so callers can plug in any
//! provider; the demo uses [`PlaceholderSource`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// The logical column a viewer is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Items,
    Categories,
    Weights,
}

impl ColumnKind {
    /// All columns in display order, left to right
    pub const ALL: [ColumnKind; 3] = [
        ColumnKind::Items,
        ColumnKind::Categories,
        ColumnKind::Weights,
    ];

    /// Header label shown above the column
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Items => "Items",
            ColumnKind::Categories => "Categories",
            ColumnKind::Weights => "Weights",
        }
    }

    /// Position of the column inside the window
    pub fn index(&self) -> usize {
        match self {
            ColumnKind::Items => 0,
            ColumnKind::Categories => 1,
            ColumnKind::Weights => 2,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Provider of the ordered lines displayed by one column
pub trait LineSource: fmt::Debug {
    /// Current content, in display order
    fn lines(&self) -> Vec<String>;
}

/// Demo content: the numbers one through seven
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSource;

impl PlaceholderSource {
    pub const LINE_COUNT: usize = 7;
}

impl LineSource for PlaceholderSource {
    fn lines(&self) -> Vec<String> {
        (1..=Self::LINE_COUNT).map(|n| n.to_string()).collect()
    }
}

/// Owned, fixed lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecSource {
    lines: Vec<String>,
}

impl VecSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for VecSource {
    fn lines(&self) -> Vec<String> {
        self.lines.clone()
    }
}
