//! Widget components
//!
//! Every widget implements [`Component`]; windows own their children and
//! walk them explicitly when resizing, rendering, and dispatching input.

pub mod column_viewer;
pub mod frame;
pub mod greeting;
pub mod item_window;
pub mod scroller;

pub use column_viewer::{ColumnViewer, GrowMode};
pub use frame::{FrameDecorator, FrameState};
pub use greeting::GreetingDialog;
pub use item_window::{ItemWindow, SizeLimits};
pub use scroller::Scroller;

use crate::app::{status::StatusLine, theme::Palette};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{buffer::Buffer, layout::Rect};

/// Input delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    MouseDown { column: u16, row: u16 },
    MouseDrag { column: u16, row: u16 },
    MouseUp { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Translate a terminal event; key releases and unsupported events map to `None`
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(InputEvent::Key(key)),
            Event::Mouse(mouse) => {
                let (column, row) = (mouse.column, mouse.row);
                match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        Some(InputEvent::MouseDown { column, row })
                    }
                    MouseEventKind::Drag(MouseButton::Left) => {
                        Some(InputEvent::MouseDrag { column, row })
                    }
                    MouseEventKind::Up(MouseButton::Left) => Some(InputEvent::MouseUp { column, row }),
                    _ => None,
                }
            }
            Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
            _ => None,
        }
    }
}

/// Whether a handler claimed the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    Ignored,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}

/// Capabilities shared by every widget
pub trait Component {
    /// Move the widget to a new screen area and recompute dependent state
    fn on_resize(&mut self, area: Rect);

    /// Draw the widget into its current area
    fn render(&self, buf: &mut Buffer, palette: &Palette);

    /// React to one input event. `status` is `None` when no status line is live.
    fn handle_input(&mut self, event: &InputEvent, status: Option<&mut StatusLine>) -> EventStatus;
}
