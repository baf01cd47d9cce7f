//! Greeting dialog
//!
//! Modal box with a line of text and four buttons. Every button closes it.

use super::{Component, EventStatus, InputEvent};
use crate::app::{status::StatusLine, theme::Palette};
use crate::util::{CellRect, Point};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

const BUTTONS: [&str; 4] = ["Terrific", "Ok", "Lousy", "Cancel"];
const BUTTON_X: u16 = 16;
const BUTTON_WIDTH: u16 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingDialog {
    message: String,
    area: Rect,
    selected: usize,
    closed_with: Option<&'static str>,
}

impl GreetingDialog {
    pub const WIDTH: u16 = 30;
    pub const HEIGHT: u16 = 11;
    pub const TITLE: &'static str = "Hello, World!";

    /// Create the dialog centered on `desktop`
    pub fn new(message: impl Into<String>, desktop: Rect) -> Self {
        let mut dialog = Self {
            message: message.into(),
            area: Rect::default(),
            selected: 0,
            closed_with: None,
        };
        dialog.on_resize(desktop);
        dialog
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn selected_button(&self) -> &'static str {
        BUTTONS[self.selected]
    }

    pub fn is_closed(&self) -> bool {
        self.closed_with.is_some()
    }

    /// Label of the button that closed the dialog
    pub fn closed_with(&self) -> Option<&'static str> {
        self.closed_with
    }

    fn button_row(index: usize) -> u16 {
        2 + 2 * index as u16
    }

    fn close(&mut self, index: usize) {
        tracing::debug!(button = BUTTONS[index], "greeting dismissed");
        self.closed_with = Some(BUTTONS[index]);
    }
}

impl Component for GreetingDialog {
    /// Re-center on a resized desktop
    fn on_resize(&mut self, desktop: Rect) {
        let width = Self::WIDTH.min(desktop.width);
        let height = Self::HEIGHT.min(desktop.height);
        self.area = Rect::new(
            desktop.x + (desktop.width - width) / 2,
            desktop.y + (desktop.height - height) / 2,
            width,
            height,
        );
    }

    fn render(&self, buf: &mut Buffer, palette: &Palette) {
        let area = self.area;
        Clear.render(area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(palette.dialog)
            .title(format!(" {} ", Self::TITLE))
            .title_alignment(Alignment::Center)
            .render(area, buf);

        if area.width <= BUTTON_X + BUTTON_WIDTH || area.height < Self::HEIGHT {
            return;
        }

        buf.set_stringn(
            area.x + 3,
            area.y + 5,
            &self.message,
            usize::from(BUTTON_X - 4),
            palette.dialog,
        );

        for (i, label) in BUTTONS.iter().enumerate() {
            let style = if i == self.selected {
                palette.button_selected
            } else {
                palette.button
            };
            let text = format!("{:^width$}", label, width = usize::from(BUTTON_WIDTH));
            buf.set_string(area.x + BUTTON_X, area.y + Self::button_row(i), text, style);
        }
    }

    fn handle_input(&mut self, event: &InputEvent, _status: Option<&mut StatusLine>) -> EventStatus {
        match *event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Left | KeyCode::BackTab => {
                    self.selected = (self.selected + BUTTONS.len() - 1) % BUTTONS.len();
                    EventStatus::Consumed
                }
                KeyCode::Down | KeyCode::Right | KeyCode::Tab => {
                    self.selected = (self.selected + 1) % BUTTONS.len();
                    EventStatus::Consumed
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.close(self.selected);
                    EventStatus::Consumed
                }
                KeyCode::Esc => {
                    self.close(BUTTONS.len() - 1);
                    EventStatus::Consumed
                }
                _ => EventStatus::Ignored,
            },
            InputEvent::MouseDown { column, row } => {
                let local = Point::local_to(self.area, column, row);
                let hit = (0..BUTTONS.len()).find(|&i| {
                    let y = i32::from(Self::button_row(i));
                    let x = i32::from(BUTTON_X);
                    CellRect::new(x, y, x + i32::from(BUTTON_WIDTH), y + 1).contains(local)
                });
                if let Some(index) = hit {
                    self.selected = index;
                    self.close(index);
                }
                EventStatus::Consumed
            }
            _ => EventStatus::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_dialog_is_centered() {
        let dialog = GreetingDialog::new("hi", Rect::new(0, 1, 80, 23));
        assert_eq!(dialog.area(), Rect::new(25, 7, 30, 11));
    }

    #[test]
    fn test_button_navigation_wraps() {
        let mut dialog = GreetingDialog::new("hi", Rect::new(0, 0, 80, 24));
        dialog.handle_input(&key(KeyCode::Up), None);
        assert_eq!(dialog.selected_button(), "Cancel");
        dialog.handle_input(&key(KeyCode::Tab), None);
        assert_eq!(dialog.selected_button(), "Terrific");
        assert!(!dialog.is_closed());
    }

    #[test]
    fn test_enter_closes_with_selected_button() {
        let mut dialog = GreetingDialog::new("hi", Rect::new(0, 0, 80, 24));
        dialog.handle_input(&key(KeyCode::Down), None);
        dialog.handle_input(&key(KeyCode::Enter), None);
        assert_eq!(dialog.closed_with(), Some("Ok"));
    }

    #[test]
    fn test_escape_cancels() {
        let mut dialog = GreetingDialog::new("hi", Rect::new(0, 0, 80, 24));
        dialog.handle_input(&key(KeyCode::Esc), None);
        assert_eq!(dialog.closed_with(), Some("Cancel"));
    }

    #[test]
    fn test_click_on_button_closes() {
        let mut dialog = GreetingDialog::new("hi", Rect::new(0, 0, 80, 24));
        let area = dialog.area();
        let press = InputEvent::MouseDown {
            column: area.x + 20,
            row: area.y + 6,
        };
        dialog.handle_input(&press, None);
        assert_eq!(dialog.closed_with(), Some("Lousy"));
    }

    #[test]
    fn test_render_shows_message_and_buttons() {
        let desktop = Rect::new(0, 0, 80, 24);
        let dialog = GreetingDialog::new("Welcome", desktop);
        let mut buf = Buffer::empty(desktop);
        dialog.render(&mut buf, &Palette::default());
        let area = dialog.area();
        let message: String = (0..7)
            .map(|i| buf.get(area.x + 3 + i, area.y + 5).symbol().to_string())
            .collect();
        assert_eq!(message, "Welcome");
        let button: String = (0..12)
            .map(|i| buf.get(area.x + BUTTON_X + i, area.y + 2).symbol().to_string())
            .collect();
        assert_eq!(button, "  Terrific  ");
    }
}
