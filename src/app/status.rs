//! Status line
//!
//! Owns the one-line selection hint. Widgets write it through
//! [`StatusLine::set_hint`] and flag refresh requests; the host consumes
//! those requests when deciding whether to redraw.

use crate::app::theme::Palette;
use ratatui::{buffer::Buffer, layout::Rect};

/// A shortcut shown on the left of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusItem {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    items: Vec<StatusItem>,
    hint: String,
    update_requested: bool,
    redraw_requested: bool,
}

impl StatusLine {
    pub const SEPARATOR: &'static str = "│ ";

    pub fn new(initial_hint: impl Into<String>) -> Self {
        Self {
            items: vec![
                StatusItem { key: "Alt-G", label: "Greeting" },
                StatusItem { key: "Alt-L", label: "List" },
                StatusItem { key: "Alt-X", label: "Exit" },
            ],
            hint: initial_hint.into(),
            update_requested: false,
            redraw_requested: false,
        }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn set_hint(&mut self, text: impl Into<String>) {
        self.hint = text.into();
    }

    /// Ask for the hint to be re-read on the next pass
    pub fn request_update(&mut self) {
        self.update_requested = true;
    }

    /// Ask for the status line to be repainted
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn is_pending(&self) -> bool {
        self.update_requested || self.redraw_requested
    }

    /// Consume outstanding requests, reporting whether there were any
    pub fn take_pending(&mut self) -> bool {
        let pending = self.is_pending();
        self.update_requested = false;
        self.redraw_requested = false;
        pending
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let right = area.x + area.width;
        buf.set_string(area.x, area.y, " ".repeat(usize::from(area.width)), palette.status);

        let mut x = area.x + 1;
        for item in &self.items {
            if x >= right {
                return;
            }
            let (next, _) = buf.set_stringn(
                x,
                area.y,
                item.key,
                usize::from(right - x),
                palette.status_shortcut,
            );
            x = next;
            if x >= right {
                return;
            }
            let (next, _) = buf.set_stringn(
                x,
                area.y,
                format!(" {}  ", item.label),
                usize::from(right - x),
                palette.status,
            );
            x = next;
        }

        if x < right {
            buf.set_stringn(
                x,
                area.y,
                format!("{}{}", Self::SEPARATOR, self.hint),
                usize::from(right - x),
                palette.status,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.get(x, y).symbol().to_string())
            .collect()
    }

    #[test]
    fn test_initial_hint() {
        let status = StatusLine::new("init");
        assert_eq!(status.hint(), "init");
        assert!(!status.is_pending());
    }

    #[test]
    fn test_requests_are_consumed_once() {
        let mut status = StatusLine::new("init");
        status.set_hint("Items: 3");
        status.request_update();
        status.request_redraw();
        assert!(status.take_pending());
        assert!(!status.take_pending());
        assert_eq!(status.hint(), "Items: 3");
    }

    #[test]
    fn test_render_shows_items_and_hint() {
        let mut status = StatusLine::new("init");
        status.set_hint("Weights: 2");
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        status.render(area, &mut buf, &Palette::default());
        let text = row_text(&buf, 0);
        assert!(text.contains("Alt-X Exit"));
        assert!(text.contains("│ Weights: 2"));
    }

    #[test]
    fn test_render_truncates_on_narrow_line() {
        let status = StatusLine::new("init");
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        status.render(area, &mut buf, &Palette::default());
        assert_eq!(row_text(&buf, 0), " Alt-G G");
    }
}
