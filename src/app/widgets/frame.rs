//! Window frame with column separators
//!
//! Draws the regular window border, then puts a junction glyph on the top
//! border wherever a column's vertical rule meets it. Stateless: the caller
//! passes the current focus and drag state on every draw.

use crate::app::theme::Palette;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

/// Single horizontal joining a single vertical below
pub const JUNCTION_SINGLE: &str = "┬";
/// Junction used on the double top border of an active window
pub const JUNCTION_DOUBLE: &str = "╤";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameState {
    pub active: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone)]
pub struct FrameDecorator<'a> {
    title: &'a str,
    number: Option<u16>,
    state: FrameState,
}

impl<'a> FrameDecorator<'a> {
    pub fn new(title: &'a str, state: FrameState) -> Self {
        Self {
            title,
            number: None,
            state,
        }
    }

    pub fn number(mut self, number: u16) -> Self {
        self.number = Some(number);
        self
    }

    /// Columns of the two separators for a window `width` cells wide
    pub fn separator_columns(width: u16) -> [i32; 2] {
        let w = i32::from(width);
        [w / 3 - 2, 2 * w / 3 - 3]
    }

    pub fn junction_glyph(state: FrameState) -> &'static str {
        if state.active && !state.dragging {
            JUNCTION_DOUBLE
        } else {
            JUNCTION_SINGLE
        }
    }

    pub fn border_style(state: FrameState, palette: &Palette) -> Style {
        if state.dragging {
            palette.frame_dragging
        } else if state.active {
            palette.frame_active
        } else {
            palette.frame_passive
        }
    }

    fn border_type(state: FrameState) -> BorderType {
        if state.active && !state.dragging {
            BorderType::Double
        } else {
            BorderType::Plain
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let style = Self::border_style(self.state, palette);

        Clear.render(area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(Self::border_type(self.state))
            .border_style(style)
            .style(palette.viewer_normal)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .render(area, buf);

        if let Some(number) = self.number {
            let label = number.to_string();
            let len = label.len() as u16;
            if area.width > len + 4 {
                buf.set_string(area.x + area.width - 3 - len, area.y, label, style);
            }
        }

        let glyph = Self::junction_glyph(self.state);
        for x in Self::separator_columns(area.width) {
            if x > 0 && x < i32::from(area.width) - 1 {
                if let Ok(x) = u16::try_from(x) {
                    buf.get_mut(area.x + x, area.y)
                        .set_symbol(glyph)
                        .set_style(style);
                }
            }
        }
    }
}
