//! Cell geometry
//!
//! Signed integer rectangles in terminal cells. Layout arithmetic is done
//! here because intermediate coordinates may go negative before a rectangle
//! is shrunk to its final size; conversion to a ratatui [`Rect`] clips.

use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

/// A cell position, relative to whatever origin the caller chose
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate an absolute screen position into coordinates local to `area`
    pub fn local_to(area: Rect, column: u16, row: u16) -> Self {
        Self {
            x: i32::from(column) - i32::from(area.x),
            y: i32::from(row) - i32::from(area.y),
        }
    }
}

/// Half-open rectangle: `a` is the top-left cell, `b` is one past the
/// bottom-right cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRect {
    pub a: Point,
    pub b: Point,
}

impl CellRect {
    pub const fn new(ax: i32, ay: i32, bx: i32, by: i32) -> Self {
        Self {
            a: Point::new(ax, ay),
            b: Point::new(bx, by),
        }
    }

    /// The local extent `[0,0]x[width,height]` of an area
    pub fn extent(width: u16, height: u16) -> Self {
        Self::new(0, 0, i32::from(width), i32::from(height))
    }

    /// Absolute rectangle covering a ratatui area
    pub fn from_area(area: Rect) -> Self {
        Self::new(
            i32::from(area.x),
            i32::from(area.y),
            i32::from(area.x) + i32::from(area.width),
            i32::from(area.y) + i32::from(area.height),
        )
    }

    /// Grow (positive) or shrink (negative) the rectangle on every side
    pub fn grow(mut self, dx: i32, dy: i32) -> Self {
        self.a.x -= dx;
        self.a.y -= dy;
        self.b.x += dx;
        self.b.y += dy;
        self
    }

    pub fn width(&self) -> i32 {
        self.b.x - self.a.x
    }

    pub fn height(&self) -> i32 {
        self.b.y - self.a.y
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.a.x && p.x < self.b.x && p.y >= self.a.y && p.y < self.b.y
    }

    /// Shift the rectangle by a cell offset
    pub fn translate(mut self, dx: i32, dy: i32) -> Self {
        self.a.x += dx;
        self.a.y += dy;
        self.b.x += dx;
        self.b.y += dy;
        self
    }

    /// Place this local rectangle inside `origin` and clip it to `origin`
    pub fn to_area(&self, origin: Rect) -> Rect {
        self.translate(i32::from(origin.x), i32::from(origin.y))
            .clip(origin)
    }

    /// Clip this absolute rectangle to `bounds`. Degenerate results collapse
    /// to a zero-sized area at the clipped corner.
    pub fn clip(&self, bounds: Rect) -> Rect {
        let limit = CellRect::from_area(bounds);
        let ax = self.a.x.clamp(limit.a.x, limit.b.x);
        let ay = self.a.y.clamp(limit.a.y, limit.b.y);
        let bx = self.b.x.clamp(ax, limit.b.x);
        let by = self.b.y.clamp(ay, limit.b.y);
        Rect::new(
            to_cell(ax),
            to_cell(ay),
            to_cell(bx - ax),
            to_cell(by - ay),
        )
    }
}

fn to_cell(value: i32) -> u16 {
    u16::try_from(value.max(0)).unwrap_or(u16::MAX)
}
