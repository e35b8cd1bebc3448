//! Interaction state machine snapshots.
//!
//! The manager holds one current and one previous [`InteractionState`].
//! Each reducer builds a whole new value instead of patching the current one,
//! so a subscriber never observes a half-applied transition.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (pointer down on an enabled draggable)
//! Dragging -> Dragging   (pointer move, scroll, or another pointer down)
//! Dragging -> Idle       (pointer up)
//! ```
//!
//! `Dragging` carries a hover sub-state: hovering iff a drop target is set.
//! Idle carries no data, so "not dragging implies every drag field is empty"
//! holds by construction.

use crate::types::{ElementId, Point, Rect, Tracked};

#[derive(Debug)]
pub enum InteractionState<P> {
    /// No drag in progress
    Idle,
    /// A drag is in progress
    Dragging(DragSession<P>),
}

impl<P> Default for InteractionState<P> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<P> Clone for InteractionState<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Dragging(session) => Self::Dragging(session.clone()),
        }
    }
}

/// Snapshot of the dragged item taken when the drag started.
///
/// The bounding box is copied so the drag keeps its starting geometry even
/// if the live element moves or is torn down mid-drag.
#[derive(Debug)]
pub struct DragOrigin<P> {
    pub tracked: Tracked<P>,
    /// Element bounds at drag start, `None` if the surface could not measure it
    pub element_rect: Option<Rect>,
}

impl<P> Clone for DragOrigin<P> {
    fn clone(&self) -> Self {
        Self {
            tracked: self.tracked.clone(),
            element_rect: self.element_rect,
        }
    }
}

#[derive(Debug)]
pub struct DragSession<P> {
    /// Fixed for the whole drag
    pub origin: DragOrigin<P>,
    /// Live registration for the dragged element; replaced on re-registration
    pub drag_item: Tracked<P>,
    /// Drop target under the pointer, if any
    pub drop_item: Option<Tracked<P>>,
    pub initial_pointer: Point,
    pub pointer: Point,
}

impl<P> Clone for DragSession<P> {
    fn clone(&self) -> Self {
        Self {
            origin: self.origin.clone(),
            drag_item: self.drag_item.clone(),
            drop_item: self.drop_item.clone(),
            initial_pointer: self.initial_pointer,
            pointer: self.pointer,
        }
    }
}

impl<P> DragSession<P> {
    #[inline]
    pub fn hovering(&self) -> bool {
        self.drop_item.is_some()
    }

    #[inline]
    pub fn displacement(&self) -> Point {
        self.pointer - self.initial_pointer
    }

    /// Element origin at drag start. Falls back to the initial pointer
    /// position when the element could not be measured.
    #[inline]
    pub fn initial_element_position(&self) -> Point {
        self.origin
            .element_rect
            .map(|rect| rect.origin)
            .unwrap_or(self.initial_pointer)
    }

    /// New session with a different drop target (and optionally pointer).
    pub fn retarget(&self, drop_item: Option<Tracked<P>>, pointer: Point) -> Self {
        Self {
            drop_item,
            pointer,
            ..self.clone()
        }
    }

    /// New session with the live drag registration swapped out.
    pub fn with_drag_item(&self, drag_item: Tracked<P>) -> Self {
        Self {
            drag_item,
            ..self.clone()
        }
    }
}

impl<P> InteractionState<P> {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.session().is_some_and(DragSession::hovering)
    }

    pub fn session(&self) -> Option<&DragSession<P>> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Element currently being dragged, if any
    pub fn dragged_element(&self) -> Option<ElementId> {
        self.session().map(|session| session.drag_item.element())
    }

    pub fn pointer(&self) -> Option<Point> {
        self.session().map(|session| session.pointer)
    }
}
