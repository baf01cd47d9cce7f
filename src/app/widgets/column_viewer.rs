//! Column viewer
//!
//! A scrollable list of text lines under a two-row header (label and rule)
//! with a single selected row. Up/Down and pointer presses move the
//! selection; every handled input rewrites the status hint.

use super::{Component, EventStatus, InputEvent, Scroller};
use crate::app::{status::StatusLine, theme::Palette};
use crate::config::persistence::ViewerRecord;
use crate::models::{ColumnKind, LineSource};
use crate::util::{CellRect, Point};
use crate::RECORD_VERSION;
use crossterm::event::KeyCode;
use ratatui::{buffer::Buffer, layout::Rect, style::Modifier};

const VERTICAL: &str = "│";
const HORIZONTAL: &str = "─";
const CROSS: &str = "┼";

/// How the viewer follows its window when the window is resized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowMode {
    /// Bottom edge follows the window
    Vertical,
    /// Right and bottom edges follow the window
    Both,
}

#[derive(Debug)]
pub struct ColumnViewer {
    kind: ColumnKind,
    label: String,
    lines: Vec<String>,
    selected: usize,
    scroller: Scroller,
    area: Rect,
    focused: bool,
    valid: bool,
    redraw_requested: bool,
    source: Option<Box<dyn LineSource>>,
}

impl ColumnViewer {
    /// Rows taken by the label and the rule under it
    pub const HEADER_HEIGHT: u16 = 2;

    pub fn new(area: Rect, kind: ColumnKind, source: Box<dyn LineSource>) -> Self {
        let lines = source.lines();
        let mut viewer = Self {
            kind,
            label: kind.label().to_string(),
            lines,
            selected: 0,
            scroller: Scroller::new(),
            area,
            focused: false,
            valid: true,
            redraw_requested: false,
            source: Some(source),
        };
        viewer.on_resize(area);
        viewer
    }

    /// Rebuild a viewer from persisted state. The selection is clamped to the
    /// restored lines; the data source is not part of the record,
    /// so [`ColumnViewer::reload`] keeps the restored lines.
    pub fn from_record(record: ViewerRecord, area: Rect) -> Self {
        let mut viewer = Self {
            kind: record.kind,
            label: record.label,
            lines: record.lines,
            selected: record.selected,
            scroller: Scroller::new(),
            area,
            focused: false,
            valid: true,
            redraw_requested: false,
            source: None,
        };
        viewer.clamp_selection();
        viewer.on_resize(area);
        viewer.scroller.ensure_visible(viewer.selected);
        viewer
    }

    pub fn to_record(&self) -> ViewerRecord {
        ViewerRecord {
            version: RECORD_VERSION,
            kind: self.kind,
            label: self.label.clone(),
            lines: self.lines.clone(),
            selected: self.selected,
        }
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    pub fn grow_mode(&self) -> GrowMode {
        match self.kind {
            ColumnKind::Categories => GrowMode::Both,
            ColumnKind::Items | ColumnKind::Weights => GrowMode::Vertical,
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// Consume the pending self-redraw request
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Replace the content, clamping the selection into the new range
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        self.clamp_selection();
        self.update_limits();
    }

    /// Pull fresh content from the data source, if the viewer has one
    pub fn reload(&mut self) {
        if let Some(source) = &self.source {
            let lines = source.lines();
            tracing::debug!(column = %self.kind, count = lines.len(), "reloading column");
            self.set_lines(lines);
        }
    }

    /// Line index under a point local to the viewer, if any
    pub fn find_selection(&self, p: Point) -> Option<usize> {
        if !CellRect::extent(self.area.width, self.area.height).contains(p) {
            return None;
        }
        let row = usize::try_from(p.y - i32::from(Self::HEADER_HEIGHT)).ok()?;
        let (_, delta_y) = self.scroller.delta();
        let index = delta_y + row;
        (index < self.lines.len()).then_some(index)
    }

    /// The exposed viewport changed: recompute scroll limits for the content
    pub fn expose(&mut self) {
        self.update_limits();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.lines.len().saturating_sub(1));
    }

    fn update_limits(&mut self) {
        let widest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        self.scroller.set_limit(widest, self.lines.len());
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.lines.len() {
            self.selected += 1;
            self.scroller.ensure_visible(self.selected);
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroller.ensure_visible(self.selected);
        }
    }

    fn publish_hint(&mut self, status: Option<&mut StatusLine>) {
        match status {
            Some(status) => {
                status.set_hint(format!("{}: {}", self.label, self.selected));
                status.request_update();
                status.request_redraw();
            }
            None => tracing::trace!(column = %self.kind, "no status line, hint skipped"),
        }
        self.redraw_requested = true;
    }
}

impl Component for ColumnViewer {
    fn on_resize(&mut self, area: Rect) {
        self.area = area;
        self.scroller.set_size(
            usize::from(area.width.saturating_sub(1)),
            usize::from(area.height.saturating_sub(Self::HEADER_HEIGHT)),
        );
        self.expose();
    }

    fn render(&self, buf: &mut Buffer, palette: &Palette) {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut frame = palette.viewer_frame;
        let mut header = palette.viewer_header;
        if self.focused {
            frame = frame.add_modifier(Modifier::BOLD);
            header = header.add_modifier(Modifier::BOLD);
        }

        let text_width = usize::from(area.width - 1);
        let edge = area.x + area.width - 1;
        let blank = " ".repeat(usize::from(area.width));

        // Header
        buf.set_string(area.x, area.y, &blank, palette.viewer_normal);
        buf.set_stringn(
            area.x,
            area.y,
            &self.label,
            text_width,
            if self.focused { header } else { frame },
        );
        buf.get_mut(edge, area.y).set_symbol(VERTICAL).set_style(frame);

        // Rule
        if area.height > 1 {
            let y = area.y + 1;
            buf.set_string(area.x, y, HORIZONTAL.repeat(text_width), frame);
            buf.get_mut(edge, y).set_symbol(CROSS).set_style(frame);
        }

        // Rows
        let (delta_x, delta_y) = self.scroller.delta();
        for row in Self::HEADER_HEIGHT..area.height {
            let y = area.y + row;
            buf.set_string(area.x, y, &blank, frame);
            buf.get_mut(edge, y).set_symbol(VERTICAL).set_style(frame);

            let index = delta_y + usize::from(row - Self::HEADER_HEIGHT);
            if let Some(line) = self.lines.get(index) {
                let style = if index == self.selected {
                    palette.viewer_selected
                } else {
                    palette.viewer_normal
                };
                let visible: String = line.chars().skip(delta_x).collect();
                buf.set_stringn(area.x, y, visible, text_width, style);
            }
        }
    }

    fn handle_input(&mut self, event: &InputEvent, status: Option<&mut StatusLine>) -> EventStatus {
        let before = self.selected;
        let result = match event {
            InputEvent::Key(key) => {
                if self.scroller.handle_key(key).is_consumed() {
                    EventStatus::Consumed
                } else {
                    match key.code {
                        KeyCode::Down => {
                            self.select_next();
                            EventStatus::Consumed
                        }
                        KeyCode::Up => {
                            self.select_previous();
                            EventStatus::Consumed
                        }
                        _ => EventStatus::Ignored,
                    }
                }
            }
            InputEvent::MouseDown { column, row } => {
                let local = Point::local_to(self.area, *column, *row);
                if let Some(index) = self.find_selection(local) {
                    self.selected = index;
                }
                EventStatus::Consumed
            }
            _ => return EventStatus::Ignored,
        };

        if self.selected != before {
            tracing::debug!(column = %self.kind, from = before, to = self.selected, "selection changed");
        }
        self.publish_hint(status);
        result
    }
}
