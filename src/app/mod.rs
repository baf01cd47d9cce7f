//! TUI application module
//!
//! Contains the terminal user interface components, the desktop that hosts
//! list windows, and application state handling.

pub mod app;
pub mod desktop;
pub mod state;
pub mod status;
pub mod theme;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use desktop::Desktop;
pub use state::{AppState, Command, StateManager};
pub use status::StatusLine;
pub use theme::Palette;
pub use tui::Tui;
