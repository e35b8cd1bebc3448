//! Drag preview overlay placement.
//!
//! A preview overlay is drawn above everything while a drag is in progress,
//! translated to where the dragged element would be if it followed the
//! pointer rigidly.

use crate::derived::DerivedState;
use crate::types::Point;
use std::sync::Arc;

#[derive(Debug)]
pub struct PreviewPlacement<P> {
    /// Top-left of the overlay in client coordinates
    pub position: Point,
    pub payload: Arc<P>,
    /// A drop target is under the pointer
    pub over_target: bool,
}

impl<P> PreviewPlacement<P> {
    /// `None` when idle: no preview is shown.
    pub fn from_state(state: &DerivedState<P>) -> Option<Self> {
        if !state.dragging {
            return None;
        }
        Some(Self {
            position: state.element_position?,
            payload: Arc::clone(state.drag_payload.as_ref()?),
            over_target: state.hovering,
        })
    }
}
