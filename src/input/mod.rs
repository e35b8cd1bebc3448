//! Pointer and scroll input handling.
//!
//! This module implements the reducers that turn raw host input into drag
//! lifecycle transitions.
//!
//! ## Architecture
//!
//! The interaction state is an explicit state machine (`InteractionState`).
//! Each reducer reads the current snapshot, hit-tests through the host
//! [`Surface`](crate::surface::Surface), commits one new snapshot, and then
//! publishes the resulting lifecycle events.
//!
//! ## Modules
//!
//! - `state` - Interaction state snapshots
//! - `coalesce` - Per-frame last-event-wins scheduling for moves and scrolls
//! - `pointer_down` - Drag start
//! - `pointer_move` - Pointer move and scroll (drop target re-targeting)
//! - `pointer_up` - Drag end and drop

mod coalesce;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use coalesce::FrameCoalescer;
pub use state::{DragOrigin, DragSession, InteractionState};

use crate::types::Point;

/// Raw input from the host platform, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    /// Released; the drop is resolved at the last reduced pointer position
    PointerUp,
    /// The viewport scrolled under a stationary pointer
    Scroll,
}

/// Identity of a coalesced reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reducer {
    PointerMove,
    Scroll,
}
