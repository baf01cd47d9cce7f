//! Scrollable viewport
//!
//! Tracks the scroll offset of a viewport over content of a known size and
//! keeps the offset inside `[0, limit - size]` on both axes.

use super::EventStatus;
use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scroller {
    delta_x: usize,
    delta_y: usize,
    limit_x: usize,
    limit_y: usize,
    width: usize,
    height: usize,
}

impl Scroller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset as `(x, y)`
    pub fn delta(&self) -> (usize, usize) {
        (self.delta_x, self.delta_y)
    }

    /// Content size as `(x, y)`
    pub fn limit(&self) -> (usize, usize) {
        (self.limit_x, self.limit_y)
    }

    /// Viewport size as `(width, height)`
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Largest offset that still fills the viewport
    pub fn max_delta(&self) -> (usize, usize) {
        (
            self.limit_x.saturating_sub(self.width),
            self.limit_y.saturating_sub(self.height),
        )
    }

    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.clamp();
    }

    pub fn set_limit(&mut self, x: usize, y: usize) {
        self.limit_x = x;
        self.limit_y = y;
        self.clamp();
    }

    pub fn scroll_to(&mut self, x: usize, y: usize) {
        self.delta_x = x;
        self.delta_y = y;
        self.clamp();
    }

    /// Scroll vertically by the minimum amount that brings `row` into view
    pub fn ensure_visible(&mut self, row: usize) {
        if self.height == 0 {
            return;
        }
        if row < self.delta_y {
            self.scroll_to(self.delta_x, row);
        } else if row >= self.delta_y + self.height {
            self.scroll_to(self.delta_x, row + 1 - self.height);
        }
    }

    /// Keyboard scrolling: horizontal by one cell, vertical by one page,
    /// Home and End jump to the top and bottom
    pub fn handle_key(&mut self, key: &KeyEvent) -> EventStatus {
        let (x, y) = self.delta();
        let page = self.height.max(1);
        match key.code {
            KeyCode::Left => self.scroll_to(x.saturating_sub(1), y),
            KeyCode::Right => self.scroll_to(x + 1, y),
            KeyCode::PageUp => self.scroll_to(x, y.saturating_sub(page)),
            KeyCode::PageDown => self.scroll_to(x, y + page),
            KeyCode::Home => self.scroll_to(x, 0),
            KeyCode::End => self.scroll_to(x, usize::MAX),
            _ => return EventStatus::Ignored,
        }
        EventStatus::Consumed
    }

    fn clamp(&mut self) {
        let (max_x, max_y) = self.max_delta();
        self.delta_x = self.delta_x.min(max_x);
        self.delta_y = self.delta_y.min(max_y);
    }
}
