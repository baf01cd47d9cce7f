//! Integration tests for column viewer selection and persistence

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use itemview::app::widgets::{ColumnViewer, Component, EventStatus, InputEvent};
use itemview::app::StatusLine;
use itemview::config::persistence::ViewerRecord;
use itemview::models::{ColumnKind, PlaceholderSource, VecSource};
use ratatui::layout::Rect;

fn press(code: KeyCode) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn focused_items_viewer() -> ColumnViewer {
    let mut viewer = ColumnViewer::new(
        Rect::new(0, 0, 20, 12),
        ColumnKind::Items,
        Box::new(PlaceholderSource),
    );
    viewer.set_focused(true);
    viewer
}

#[test]
fn test_down_ten_times_clamps_to_last_line() {
    let mut viewer = focused_items_viewer();
    let mut status = StatusLine::new("init");

    for _ in 0..10 {
        let result = viewer.handle_input(&press(KeyCode::Down), Some(&mut status));
        assert_eq!(result, EventStatus::Consumed);
        assert!(viewer.selected() <= viewer.lines().len() - 1);
    }

    assert_eq!(viewer.selected(), 6);
    assert_eq!(status.hint(), "Items: 6");
}

#[test]
fn test_up_never_goes_below_zero() {
    let mut viewer = focused_items_viewer();
    for _ in 0..3 {
        viewer.handle_input(&press(KeyCode::Down), None);
    }
    for _ in 0..10 {
        viewer.handle_input(&press(KeyCode::Up), None);
    }
    assert_eq!(viewer.selected(), 0);
}

#[test]
fn test_pointer_rows_map_below_header() {
    let mut viewer = focused_items_viewer();
    let mut status = StatusLine::new("init");

    viewer.handle_input(&press(KeyCode::Down), Some(&mut status));
    viewer.handle_input(&press(KeyCode::Down), Some(&mut status));

    // Local row 2 is the first data row
    viewer.handle_input(&InputEvent::MouseDown { column: 3, row: 2 }, Some(&mut status));
    assert_eq!(viewer.selected(), 0);

    viewer.handle_input(&InputEvent::MouseDown { column: 3, row: 5 }, Some(&mut status));
    assert_eq!(viewer.selected(), 3);

    // Local row 9 is past the seventh line
    viewer.handle_input(&InputEvent::MouseDown { column: 3, row: 9 }, Some(&mut status));
    assert_eq!(viewer.selected(), 3);
    assert_eq!(status.hint(), "Items: 3");

    // Local row 8 holds the seventh line
    viewer.handle_input(&InputEvent::MouseDown { column: 3, row: 8 }, Some(&mut status));
    assert_eq!(viewer.selected(), 6);
}

#[test]
fn test_every_input_refreshes_the_hint() {
    let mut viewer = focused_items_viewer();
    let mut status = StatusLine::new("init");

    viewer.handle_input(&press(KeyCode::Up), Some(&mut status));
    assert_eq!(status.hint(), "Items: 0");
    assert!(status.take_pending());

    viewer.handle_input(&InputEvent::MouseDown { column: 3, row: 0 }, Some(&mut status));
    assert!(status.take_pending());
    assert!(viewer.take_redraw());
}

#[test]
fn test_injected_source_drives_content() {
    let source = VecSource::new(["bread", "milk", "eggs"]);
    let mut viewer = ColumnViewer::new(Rect::new(0, 0, 20, 12), ColumnKind::Categories, Box::new(source));
    let mut status = StatusLine::new("init");
    for _ in 0..5 {
        viewer.handle_input(&press(KeyCode::Down), Some(&mut status));
    }
    assert_eq!(viewer.lines()[viewer.selected()], "eggs");
    assert_eq!(status.hint(), "Categories: 2");

    viewer.set_lines(Vec::new());
    viewer.reload();
    assert_eq!(viewer.lines().len(), 3);
}

#[test]
fn test_serialized_viewer_restores_label() {
    let mut viewer = focused_items_viewer();
    viewer.handle_input(&press(KeyCode::Down), None);

    let mut stream = Vec::new();
    viewer.to_record().write_to(&mut stream).expect("serialize");
    let record = ViewerRecord::read_from(stream.as_slice()).expect("deserialize");
    let restored = ColumnViewer::from_record(record, Rect::new(0, 0, 20, 12));

    assert_eq!(restored.label(), "Items");
    assert_eq!(restored.lines(), viewer.lines());
    assert_eq!(restored.selected(), 1);
    assert!(restored.is_valid());
}
