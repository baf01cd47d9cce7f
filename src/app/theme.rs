//! Color palette
//!
//! Styles for every widget in one place so windows, viewers and the
//! surrounding shell agree on colors.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub desktop: Style,
    pub menu: Style,
    pub menu_shortcut: Style,
    pub status: Style,
    pub status_shortcut: Style,
    pub frame_passive: Style,
    pub frame_active: Style,
    pub frame_dragging: Style,
    pub scroll_bar: Style,
    pub scroll_thumb: Style,
    pub viewer_normal: Style,
    pub viewer_selected: Style,
    pub viewer_frame: Style,
    pub viewer_header: Style,
    pub dialog: Style,
    pub button: Style,
    pub button_selected: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            desktop: Style::default().fg(Color::Blue).bg(Color::DarkGray),
            menu: Style::default().fg(Color::Black).bg(Color::Gray),
            menu_shortcut: Style::default().fg(Color::Red).bg(Color::Gray),
            status: Style::default().fg(Color::Black).bg(Color::Gray),
            status_shortcut: Style::default().fg(Color::Red).bg(Color::Gray),
            frame_passive: Style::default().fg(Color::Gray).bg(Color::Blue),
            frame_active: Style::default().fg(Color::White).bg(Color::Blue),
            frame_dragging: Style::default().fg(Color::LightGreen).bg(Color::Blue),
            scroll_bar: Style::default().fg(Color::Cyan).bg(Color::Blue),
            scroll_thumb: Style::default().fg(Color::White).bg(Color::Blue),
            viewer_normal: Style::default().fg(Color::White).bg(Color::Blue),
            viewer_selected: Style::default().fg(Color::Black).bg(Color::Cyan),
            viewer_frame: Style::default().fg(Color::LightCyan).bg(Color::Blue),
            viewer_header: Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            dialog: Style::default().fg(Color::Black).bg(Color::Gray),
            button: Style::default().fg(Color::Black).bg(Color::Green),
            button_selected: Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }
}
