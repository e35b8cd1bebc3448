//! Tests for field-filtered state watchers.

use crate::helpers::*;
use dropzone::{DerivedField, Listener, Point};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_payload_watcher_ignores_moves() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    let watcher = manager.watch(&[DerivedField::DragPayload], Listener::new());
    assert_eq!(watcher.revision(), 0);

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    // DragStart and HoverStart both see the payload appear in the same transition.
    let after_down = watcher.revision();
    assert!(after_down >= 1);
    assert_eq!(watcher.state().drag_payload.as_deref(), Some(&"card"));

    manager.pointer_move(&surface, Point::new(50.0, 30.0));
    manager.pointer_move(&surface, Point::new(60.0, 40.0));
    assert_eq!(watcher.revision(), after_down);
    // The watched copy still holds the state from the drag start.
    assert_eq!(watcher.state().pointer_position, Some(Point::new(10.0, 10.0)));

    manager.pointer_up(&surface);
    assert!(watcher.revision() > after_down);
    assert!(!watcher.state().dragging);
}

#[test]
fn test_user_any_hook_still_runs() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let drops = Rc::new(Cell::new(0));
    let drop_counter = Rc::clone(&drops);

    let watcher = manager.watch(
        &[DerivedField::Hovering],
        Listener::new()
            .on_any(move |_, _| counter.set(counter.get() + 1))
            .on_drop(move |_, _| drop_counter.set(drop_counter.get() + 1)),
    );

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    manager.pointer_move(&surface, Point::new(12.0, 12.0));
    manager.pointer_up(&surface);

    // DragStart, HoverStart, DragMove, DragEnd, HoverEnd, Drop
    assert_eq!(calls.get(), 6);
    assert_eq!(drops.get(), 1);
    assert_eq!(watcher.fields(), &[DerivedField::Hovering]);
}

#[test]
fn test_detach_stops_updates() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    let watcher = manager.watch_all(Listener::new());
    let reader = watcher.reader();
    assert_eq!(manager.subscriber_count(), 1);

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    let revision = reader.revision();
    assert!(revision > 0);

    assert!(watcher.detach(&mut manager));
    assert_eq!(manager.subscriber_count(), 0);

    manager.pointer_move(&surface, Point::new(40.0, 40.0));
    assert_eq!(reader.revision(), revision);
    assert!(reader.state().dragging);
}

#[test]
fn test_watch_all_tracks_every_move() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    let watcher = manager.watch_all(Listener::new());

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    let after_down = watcher.revision();
    manager.pointer_move(&surface, Point::new(11.0, 10.0));

    assert_eq!(watcher.revision(), after_down + 1);
    assert_eq!(
        watcher.reader().state().pointer_position,
        Some(Point::new(11.0, 10.0))
    );
}

#[test]
fn test_watcher_starts_from_current_state() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    manager.pointer_down(&surface, Point::new(10.0, 10.0));

    let watcher = manager.watch(&[DerivedField::Dragging], Listener::new());

    assert_eq!(watcher.revision(), 0);
    assert!(watcher.state().dragging);
}
