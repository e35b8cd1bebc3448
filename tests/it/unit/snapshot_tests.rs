//! Snapshot tests using the insta crate.
//!
//! Derived state has many fields; snapshots keep the full shape of a
//! snapshot pair visible in one place.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::*;
use dropzone::{DerivedState, Point};

#[test]
fn snapshot_state_after_moving_off_target() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    manager.pointer_move(&surface, Point::new(50.0, 30.0));

    insta::assert_debug_snapshot!(manager.current_derived_state(), @r#"
    DerivedState {
        dragging: true,
        hovering: false,
        drag_payload: Some(
            "card",
        ),
        drop_payload: None,
        initial_pointer_position: Some(
            Point {
                x: 10.0,
                y: 10.0,
            },
        ),
        pointer_position: Some(
            Point {
                x: 50.0,
                y: 30.0,
            },
        ),
        initial_element_position: Some(
            Point {
                x: 0.0,
                y: 0.0,
            },
        ),
        element_position: Some(
            Point {
                x: 40.0,
                y: 20.0,
            },
        ),
        displacement: Some(
            Point {
                x: 40.0,
                y: 20.0,
            },
        ),
    }
    "#);
}

#[test]
fn snapshot_drop_prev_state_json() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();
    let recorder = Recorder::attach(&mut manager);
    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    manager.pointer_up(&surface);

    let drop = recorder.last().unwrap();
    let json = serde_json::to_string_pretty(&drop.prev).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "dragging": true,
      "hovering": true,
      "drag_payload": "card",
      "drop_payload": "column",
      "initial_pointer_position": {
        "x": 10.0,
        "y": 10.0
      },
      "pointer_position": {
        "x": 10.0,
        "y": 10.0
      },
      "initial_element_position": {
        "x": 0.0,
        "y": 0.0
      },
      "element_position": {
        "x": 0.0,
        "y": 0.0
      },
      "displacement": {
        "x": 0.0,
        "y": 0.0
      }
    }
    "#);
}

#[test]
fn snapshot_idle_state_json() {
    let json = serde_json::to_string_pretty(&DerivedState::<Payload>::idle()).unwrap();
    insta::assert_snapshot!(json, @r#"
    {
      "dragging": false,
      "hovering": false,
      "drag_payload": null,
      "drop_payload": null,
      "initial_pointer_position": null,
      "pointer_position": null,
      "initial_element_position": null,
      "element_position": null,
      "displacement": null
    }
    "#);
}
