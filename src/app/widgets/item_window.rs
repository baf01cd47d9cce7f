//! Multi-column list window
//!
//! Hosts one [`ColumnViewer`] per [`ColumnKind`] side by side. Column
//! rectangles are derived from the window extent every time the window is
//! resized. Each column ends on its own vertical rule, which lands on the
//! separator column drawn by [`FrameDecorator`].

use super::{ColumnViewer, Component, EventStatus, FrameDecorator, FrameState, InputEvent};
use crate::app::{status::StatusLine, theme::Palette};
use crate::config::persistence::WindowRecord;
use crate::models::{ColumnKind, LineSource, PlaceholderSource};
use crate::util::{CellRect, Point};
use crate::{Error, Result, RECORD_VERSION};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};

const SCROLL_TRACK: &str = "░";
const SCROLL_THUMB: &str = "■";

/// Smallest and largest size the window may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragMode {
    Move,
    Resize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    mode: DragMode,
    /// Pointer position relative to the window origin when the drag started
    anchor: Point,
}

#[derive(Debug)]
pub struct ItemWindow {
    title: String,
    number: u16,
    bounds: Rect,
    desktop: Rect,
    viewers: [ColumnViewer; 3],
    focused: usize,
    active: bool,
    drag: Option<Drag>,
}

impl ItemWindow {
    /// Host default for the smallest window height
    pub const MIN_HEIGHT: u16 = 6;

    /// Build a window filling `bounds`, one data source per column in
    /// [`ColumnKind::ALL`] order
    pub fn new(
        title: impl Into<String>,
        number: u16,
        bounds: Rect,
        desktop: Rect,
        sources: [Box<dyn LineSource>; 3],
    ) -> Self {
        let rects = Self::column_bounds(bounds.width, bounds.height);
        let [items, categories, weights] = sources;
        let viewers = [
            ColumnViewer::new(rects[0].to_area(bounds), ColumnKind::Items, items),
            ColumnViewer::new(rects[1].to_area(bounds), ColumnKind::Categories, categories),
            ColumnViewer::new(rects[2].to_area(bounds), ColumnKind::Weights, weights),
        ];
        let mut window = Self {
            title: title.into(),
            number,
            bounds,
            desktop,
            viewers,
            focused: 0,
            active: true,
            drag: None,
        };
        window.apply_focus();
        window
    }

    /// Window showing the demo content in every column
    pub fn with_placeholders(title: impl Into<String>, number: u16, bounds: Rect, desktop: Rect) -> Self {
        Self::new(
            title,
            number,
            bounds,
            desktop,
            [
                Box::new(PlaceholderSource),
                Box::new(PlaceholderSource),
                Box::new(PlaceholderSource),
            ],
        )
    }

    /// Rebuild a window from persisted state, clamped into `desktop`
    pub fn from_record(record: WindowRecord, desktop: Rect) -> Result<Self> {
        record.validate()?;
        let bounds = record.bounds.clip(desktop);
        let rects = Self::column_bounds(bounds.width, bounds.height);
        let restored: Vec<ColumnViewer> = record
            .viewers
            .into_iter()
            .zip(rects)
            .map(|(viewer, rect)| ColumnViewer::from_record(viewer, rect.to_area(bounds)))
            .collect();
        let viewers = <[ColumnViewer; 3]>::try_from(restored).map_err(|rest| {
            Error::Persistence(format!("Expected 3 columns, restored {}", rest.len()))
        })?;
        let mut window = Self {
            title: record.title,
            number: record.number,
            bounds,
            desktop,
            viewers,
            focused: record.focused.min(2),
            active: true,
            drag: None,
        };
        window.locate(bounds);
        window.apply_focus();
        Ok(window)
    }

    pub fn to_record(&self) -> WindowRecord {
        WindowRecord {
            version: RECORD_VERSION,
            title: self.title.clone(),
            number: self.number,
            bounds: CellRect::from_area(self.bounds),
            focused: self.focused,
            viewers: self.viewers.iter().map(ColumnViewer::to_record).collect(),
        }
    }

    /// Local column rectangles for a window of the given extent, each
    /// shrunk by one cell on every side for the shared border
    pub fn column_bounds(width: u16, height: u16) -> [CellRect; 3] {
        let w = i32::from(width);
        let h = i32::from(height);
        [
            CellRect::new(0, 0, w / 3, h).grow(-1, -1),
            CellRect::new(w / 3 - 2, 0, 2 * w / 3 - 1, h).grow(-1, -1),
            CellRect::new(2 * w / 3 - 3, 0, w, h).grow(-1, -1),
        ]
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn viewers(&self) -> &[ColumnViewer; 3] {
        &self.viewers
    }

    pub fn viewer(&self, kind: ColumnKind) -> &ColumnViewer {
        &self.viewers[kind.index()]
    }

    pub fn focused_column(&self) -> ColumnKind {
        self.viewers[self.focused].kind()
    }

    pub fn focus(&mut self, kind: ColumnKind) {
        self.focused = kind.index();
        self.apply_focus();
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.viewers.len();
        self.apply_focus();
    }

    pub fn focus_previous(&mut self) {
        self.focused = (self.focused + self.viewers.len() - 1) % self.viewers.len();
        self.apply_focus();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.drag = None;
        }
        self.apply_focus();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            active: self.active,
            dragging: self.is_dragging(),
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        CellRect::from_area(self.bounds).contains(Point::new(i32::from(column), i32::from(row)))
    }

    /// Consume pending redraw requests raised by the columns
    pub fn take_redraw(&mut self) -> bool {
        self.viewers
            .iter_mut()
            .fold(false, |pending, viewer| viewer.take_redraw() || pending)
    }

    /// Size constraints given the current size. The minimum width depends
    /// on the width before the change, so repeated shrinking converges.
    pub fn size_limits(&self) -> SizeLimits {
        SizeLimits {
            min_width: self.bounds.width / 2 + 10,
            min_height: Self::MIN_HEIGHT,
            max_width: self.desktop.width,
            max_height: self.desktop.height,
        }
    }

    /// Move and resize the window, applying the size limits (minimum first,
    /// then maximum) and keeping it inside the desktop
    pub fn locate(&mut self, requested: Rect) {
        let limits = self.size_limits();
        let width = requested.width.max(limits.min_width).min(limits.max_width);
        let height = requested.height.max(limits.min_height).min(limits.max_height);
        let x = requested
            .x
            .clamp(self.desktop.x, self.desktop.x + self.desktop.width - width);
        let y = requested
            .y
            .clamp(self.desktop.y, self.desktop.y + self.desktop.height - height);
        let bounds = Rect::new(x, y, width, height);
        if bounds != requested {
            tracing::debug!(?requested, ?bounds, "window bounds clamped");
        }
        self.on_resize(bounds);
    }

    /// The desktop changed size: re-apply the limits against it
    pub fn set_desktop(&mut self, desktop: Rect) {
        self.desktop = desktop;
        self.locate(self.bounds);
    }

    /// Scroll bars of the focused column, drawn over the right and bottom
    /// frame edges of the active window
    fn render_scroll_bars(&self, buf: &mut Buffer, palette: &Palette) {
        let area = self.bounds;
        if !self.active || area.width < 6 || area.height < 4 {
            return;
        }
        let scroller = self.viewers[self.focused].scroller();
        let (delta_x, delta_y) = scroller.delta();
        let (max_x, max_y) = scroller.max_delta();
        let (width, height) = scroller.size();

        let vertical = Rect::new(area.x + area.width - 1, area.y + 1, 1, area.height - 2);
        let mut state = ScrollbarState::new(max_y + 1)
            .position(delta_y)
            .viewport_content_length(height);
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some(SCROLL_TRACK))
            .thumb_symbol(SCROLL_THUMB)
            .style(palette.scroll_bar)
            .thumb_style(palette.scroll_thumb)
            .render(vertical, buf, &mut state);

        let horizontal = Rect::new(area.x + 2, area.y + area.height - 1, area.width - 4, 1);
        let mut state = ScrollbarState::new(max_x + 1)
            .position(delta_x)
            .viewport_content_length(width);
        Scrollbar::new(ScrollbarOrientation::HorizontalBottom)
            .begin_symbol(Some("◄"))
            .end_symbol(Some("►"))
            .track_symbol(Some(SCROLL_TRACK))
            .thumb_symbol(SCROLL_THUMB)
            .style(palette.scroll_bar)
            .thumb_style(palette.scroll_thumb)
            .render(horizontal, buf, &mut state);
    }

    fn apply_focus(&mut self) {
        let (focused, active) = (self.focused, self.active);
        for (i, viewer) in self.viewers.iter_mut().enumerate() {
            viewer.set_focused(active && i == focused);
        }
    }

    fn start_drag(&mut self, local: Point) -> EventStatus {
        let (w, h) = (i32::from(self.bounds.width), i32::from(self.bounds.height));
        let mode = if local == Point::new(w - 1, h - 1) {
            DragMode::Resize
        } else if local.y == 0 {
            DragMode::Move
        } else {
            return EventStatus::Consumed;
        };
        tracing::debug!(window = self.number, ?mode, "drag started");
        self.drag = Some(Drag { mode, anchor: local });
        EventStatus::Consumed
    }

    fn continue_drag(&mut self, drag: Drag, column: u16, row: u16) {
        let (column, row) = (i32::from(column), i32::from(row));
        let bounds = self.bounds;
        let requested = match drag.mode {
            DragMode::Move => Rect::new(
                clamp_cell(column - drag.anchor.x),
                clamp_cell(row - drag.anchor.y),
                bounds.width,
                bounds.height,
            ),
            DragMode::Resize => Rect::new(
                bounds.x,
                bounds.y,
                clamp_cell(column - i32::from(bounds.x) + 1),
                clamp_cell(row - i32::from(bounds.y) + 1),
            ),
        };
        self.locate(requested);
    }
}

fn clamp_cell(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}

impl Component for ItemWindow {
    fn on_resize(&mut self, area: Rect) {
        self.bounds = area;
        let rects = Self::column_bounds(area.width, area.height);
        for (viewer, rect) in self.viewers.iter_mut().zip(rects) {
            viewer.on_resize(rect.to_area(area));
        }
    }

    fn render(&self, buf: &mut Buffer, palette: &Palette) {
        FrameDecorator::new(&self.title, self.frame_state())
            .number(self.number)
            .render(self.bounds, buf, palette);
        for viewer in &self.viewers {
            viewer.render(buf, palette);
        }
        self.render_scroll_bars(buf, palette);
    }

    fn handle_input(&mut self, event: &InputEvent, status: Option<&mut StatusLine>) -> EventStatus {
        match *event {
            InputEvent::Key(key) => {
                // The focused column sees every key first, Tab included
                let result = self.viewers[self.focused].handle_input(event, status);
                if result.is_consumed() {
                    return result;
                }
                match key.code {
                    KeyCode::Tab => self.focus_next(),
                    KeyCode::BackTab => self.focus_previous(),
                    _ => return EventStatus::Ignored,
                }
                EventStatus::Consumed
            }
            InputEvent::MouseDown { column, row } => {
                if !self.contains(column, row) {
                    return EventStatus::Ignored;
                }
                let hit = self.viewers.iter().position(|viewer| {
                    CellRect::from_area(viewer.area())
                        .contains(Point::new(i32::from(column), i32::from(row)))
                });
                match hit {
                    Some(index) => {
                        self.focused = index;
                        self.apply_focus();
                        self.viewers[index].handle_input(event, status)
                    }
                    None => self.start_drag(Point::local_to(self.bounds, column, row)),
                }
            }
            InputEvent::MouseDrag { column, row } => match self.drag {
                Some(drag) => {
                    self.continue_drag(drag, column, row);
                    EventStatus::Consumed
                }
                None => EventStatus::Ignored,
            },
            InputEvent::MouseUp { .. } => match self.drag.take() {
                Some(_) => {
                    tracing::debug!(window = self.number, bounds = ?self.bounds, "drag finished");
                    EventStatus::Consumed
                }
                None => EventStatus::Ignored,
            },
            InputEvent::Resize { .. } => EventStatus::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VecSource;
    use crossterm::event::{KeyEvent, KeyModifiers};

    const DESKTOP: Rect = Rect {
        x: 0,
        y: 1,
        width: 90,
        height: 28,
    };

    fn window(width: u16, height: u16) -> ItemWindow {
        ItemWindow::with_placeholders("test", 1, Rect::new(0, 1, width, height), DESKTOP)
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_column_bounds_formula() {
        let [a, b, c] = ItemWindow::column_bounds(60, 20);
        assert_eq!(a, CellRect::new(1, 1, 19, 19));
        assert_eq!(b, CellRect::new(19, 1, 38, 19));
        assert_eq!(c, CellRect::new(38, 1, 59, 19));
    }

    #[test]
    fn test_viewer_areas_follow_bounds() {
        let w = window(60, 20);
        let areas: Vec<Rect> = w.viewers().iter().map(ColumnViewer::area).collect();
        assert_eq!(
            areas,
            vec![
                Rect::new(1, 2, 18, 18),
                Rect::new(19, 2, 19, 18),
                Rect::new(38, 2, 21, 18),
            ]
        );
    }

    #[test]
    fn test_column_rules_meet_separators() {
        for width in [40u16, 60, 61, 62, 80, 90] {
            let [a, b, _] = ItemWindow::column_bounds(width, 10);
            let [first, second] = FrameDecorator::separator_columns(width);
            assert_eq!(a.b.x - 1, first);
            assert_eq!(b.b.x - 1, second);
        }
    }

    #[test]
    fn test_resize_recomputes_every_column() {
        let mut w = window(60, 20);
        w.on_resize(Rect::new(0, 1, 81, 20));
        let expected = ItemWindow::column_bounds(81, 20);
        for (viewer, rect) in w.viewers().iter().zip(expected) {
            assert_eq!(viewer.area(), rect.to_area(w.bounds()));
        }
    }

    #[test]
    fn test_size_limits() {
        let w = window(60, 20);
        let limits = w.size_limits();
        assert_eq!(limits.min_width, 40);
        assert_eq!(limits.min_height, ItemWindow::MIN_HEIGHT);
        assert_eq!(limits.max_width, 90);
    }

    #[test]
    fn test_locate_clamps_below_minimum_width() {
        let mut w = window(60, 20);
        w.locate(Rect::new(0, 1, 20, 3));
        assert_eq!(w.bounds().width, 40);
        assert_eq!(w.bounds().height, 6);
        w.locate(Rect::new(0, 1, 10, 10));
        assert_eq!(w.bounds().width, 30);
    }

    #[test]
    fn test_locate_keeps_window_on_desktop() {
        let mut w = window(60, 20);
        w.locate(Rect::new(80, 25, 60, 20));
        assert_eq!(w.bounds(), Rect::new(30, 9, 60, 20));
        w.locate(Rect::new(0, 0, 200, 50));
        assert_eq!(w.bounds(), DESKTOP);
    }

    #[test]
    fn test_keys_go_to_focused_column() {
        let mut w = window(60, 20);
        let mut status = StatusLine::new("init");
        assert_eq!(w.focused_column(), ColumnKind::Items);
        w.handle_input(&key(KeyCode::Down), Some(&mut status));
        assert_eq!(w.viewer(ColumnKind::Items).selected(), 1);

        w.handle_input(&key(KeyCode::Tab), Some(&mut status));
        assert_eq!(w.focused_column(), ColumnKind::Categories);
        w.handle_input(&key(KeyCode::Down), Some(&mut status));
        w.handle_input(&key(KeyCode::Down), Some(&mut status));
        assert_eq!(w.viewer(ColumnKind::Categories).selected(), 2);
        assert_eq!(status.hint(), "Categories: 2");

        w.handle_input(&key(KeyCode::BackTab), Some(&mut status));
        w.handle_input(&key(KeyCode::BackTab), Some(&mut status));
        assert_eq!(w.focused_column(), ColumnKind::Weights);
        assert!(w.take_redraw());
        assert!(!w.take_redraw());
    }

    #[test]
    fn test_click_focuses_and_selects() {
        let mut w = window(60, 20);
        let mut status = StatusLine::new("init");
        // Weights column starts at x=38, data rows start at y=1+1+2
        let press = InputEvent::MouseDown { column: 40, row: 7 };
        assert_eq!(w.handle_input(&press, Some(&mut status)), EventStatus::Consumed);
        assert_eq!(w.focused_column(), ColumnKind::Weights);
        assert_eq!(w.viewer(ColumnKind::Weights).selected(), 3);
        assert!(w.viewer(ColumnKind::Weights).is_focused());
        assert!(!w.viewer(ColumnKind::Items).is_focused());
        assert_eq!(status.hint(), "Weights: 3");
    }

    #[test]
    fn test_click_outside_is_ignored() {
        let mut w = window(60, 20);
        let press = InputEvent::MouseDown { column: 70, row: 5 };
        assert_eq!(w.handle_input(&press, None), EventStatus::Ignored);
    }

    #[test]
    fn test_drag_title_moves_window() {
        let mut w = window(60, 20);
        w.handle_input(&InputEvent::MouseDown { column: 10, row: 1 }, None);
        assert!(w.is_dragging());
        assert!(w.frame_state().dragging);
        w.handle_input(&InputEvent::MouseDrag { column: 15, row: 4 }, None);
        assert_eq!(w.bounds(), Rect::new(5, 4, 60, 20));
        assert_eq!(w.viewer(ColumnKind::Items).area(), Rect::new(6, 5, 18, 18));
        w.handle_input(&InputEvent::MouseUp { column: 15, row: 4 }, None);
        assert!(!w.is_dragging());
    }

    #[test]
    fn test_drag_corner_resizes_window() {
        let mut w = window(60, 20);
        w.handle_input(&InputEvent::MouseDown { column: 59, row: 20 }, None);
        w.handle_input(&InputEvent::MouseDrag { column: 79, row: 24 }, None);
        assert_eq!(w.bounds(), Rect::new(0, 1, 80, 24));
        // Shrinking is limited by the width before the change
        w.handle_input(&InputEvent::MouseDrag { column: 9, row: 24 }, None);
        assert_eq!(w.bounds().width, 50);
    }

    #[test]
    fn test_inactive_window_has_no_focused_column() {
        let mut w = window(60, 20);
        w.set_active(false);
        assert!(w.viewers().iter().all(|v| !v.is_focused()));
        w.set_active(true);
        assert!(w.viewer(ColumnKind::Items).is_focused());
    }

    #[test]
    fn test_record_roundtrip() {
        let mut w = window(60, 20);
        w.handle_input(&key(KeyCode::Tab), None);
        w.handle_input(&key(KeyCode::Down), None);
        let restored = ItemWindow::from_record(w.to_record(), DESKTOP).expect("restore");
        assert_eq!(restored.bounds(), w.bounds());
        assert_eq!(restored.focused_column(), ColumnKind::Categories);
        assert_eq!(restored.viewer(ColumnKind::Categories).selected(), 1);
        assert_eq!(restored.viewer(ColumnKind::Weights).label(), "Weights");
    }

    #[test]
    fn test_render_draws_frame_and_columns() {
        let w = window(60, 20);
        let area = Rect::new(0, 0, 90, 29);
        let mut buf = Buffer::empty(area);
        w.render(&mut buf, &Palette::default());
        assert_eq!(buf.get(18, 1).symbol(), "╤");
        assert_eq!(buf.get(37, 1).symbol(), "╤");
        assert_eq!(buf.get(1, 2).symbol(), "I");
        assert_eq!(buf.get(19, 2).symbol(), "C");
        assert_eq!(buf.get(38, 2).symbol(), "W");
        assert_eq!(buf.get(18, 3).symbol(), "┼");
        assert_eq!(buf.get(18, 4).symbol(), "│");
    }

    #[test]
    fn test_tab_reaches_focused_column_first() {
        let mut w = window(60, 20);
        let mut status = StatusLine::new("init");
        assert_eq!(w.handle_input(&key(KeyCode::Tab), Some(&mut status)), EventStatus::Consumed);
        assert_eq!(status.hint(), "Items: 0");
        assert!(status.take_pending());
        assert_eq!(w.focused_column(), ColumnKind::Categories);

        w.handle_input(&key(KeyCode::BackTab), Some(&mut status));
        assert_eq!(status.hint(), "Categories: 0");
        assert_eq!(w.focused_column(), ColumnKind::Items);
    }

    #[test]
    fn test_unhandled_key_is_ignored() {
        let mut w = window(60, 20);
        assert_eq!(w.handle_input(&key(KeyCode::Char('q')), None), EventStatus::Ignored);
        assert_eq!(w.focused_column(), ColumnKind::Items);
    }

    fn long_window() -> ItemWindow {
        let lines: Vec<String> = (1..=40).map(|n| n.to_string()).collect();
        ItemWindow::new(
            "test",
            1,
            Rect::new(0, 0, 60, 20),
            Rect::new(0, 0, 90, 28),
            [
                Box::new(VecSource::new(lines)),
                Box::new(PlaceholderSource),
                Box::new(PlaceholderSource),
            ],
        )
    }

    /// Rows of the vertical scroll bar track holding the thumb
    fn thumb_rows(w: &ItemWindow) -> Vec<u16> {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        w.render(&mut buf, &Palette::default());
        assert_eq!(buf.get(59, 1).symbol(), "▲");
        assert_eq!(buf.get(59, 18).symbol(), "▼");
        (2..18).filter(|&y| buf.get(59, y).symbol() == SCROLL_THUMB).collect()
    }

    #[test]
    fn test_scroll_bar_thumb_follows_offset() {
        let mut w = long_window();
        // 40 lines over 16 data rows: offsets 0..=24 on a 16 cell track
        assert_eq!(w.viewer(ColumnKind::Items).scroller().max_delta(), (0, 24));
        assert_eq!(thumb_rows(&w), (2..8).collect::<Vec<_>>());

        w.handle_input(&key(KeyCode::PageDown), None);
        assert_eq!(w.viewer(ColumnKind::Items).scroller().delta(), (0, 16));
        assert_eq!(thumb_rows(&w), (8..15).collect::<Vec<_>>());

        w.handle_input(&key(KeyCode::End), None);
        assert_eq!(thumb_rows(&w), (12..18).collect::<Vec<_>>());
    }

    #[test]
    fn test_scroll_bars_track_focused_column() {
        let mut w = long_window();
        w.handle_input(&key(KeyCode::End), None);
        w.handle_input(&key(KeyCode::Tab), None);
        // The Categories column fits its rows, so the thumb fills the track
        assert_eq!(thumb_rows(&w), (2..18).collect::<Vec<_>>());

        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        w.render(&mut buf, &Palette::default());
        assert_eq!(buf.get(2, 19).symbol(), "◄");
        assert_eq!(buf.get(3, 19).symbol(), SCROLL_THUMB);
        assert_eq!(buf.get(57, 19).symbol(), "►");
    }

    #[test]
    fn test_inactive_window_hides_scroll_bars() {
        let mut w = long_window();
        w.set_active(false);
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 20));
        w.render(&mut buf, &Palette::default());
        assert_eq!(buf.get(59, 1).symbol(), "│");
        assert_eq!(buf.get(2, 19).symbol(), "─");
    }
}
