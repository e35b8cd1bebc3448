//! Pointer move and scroll handling - drop target re-targeting.
//!
//! ## Performance Notes
//!
//! Moves can arrive far faster than frames are displayed. When coalescing is
//! enabled the manager reduces at most one move and one scroll per frame, so
//! the hit test below runs a bounded number of times regardless of input rate.

use crate::bus::DragEvent;
use crate::input::state::InteractionState;
use crate::manager::DragDropManager;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::{ItemKind, Point};

impl<P> DragDropManager<P> {
    /// Move the pointer of the current drag. No-op while idle.
    pub fn pointer_move<S: Surface + ?Sized>(&mut self, surface: &S, point: Point) -> bool {
        profile_scope!("pointer_move");
        self.retarget(surface, point, true)
    }

    /// Re-test drop targets under the unchanged pointer after the viewport
    /// scrolled. No-op while idle.
    ///
    /// Only droppables are re-tested; whether the dragged element itself
    /// scrolled out of view is not re-evaluated.
    pub fn scroll<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
        profile_scope!("scroll");
        let Some(pointer) = self.state.pointer() else {
            return false;
        };
        self.retarget(surface, pointer, false)
    }

    fn retarget<S: Surface + ?Sized>(&mut self, surface: &S, point: Point, moved: bool) -> bool {
        if !self.state.is_dragging() {
            return false;
        }

        let drop_item = self.hit_test(ItemKind::Droppable, &surface.elements_at(point));
        let Some(session) = self.state.session() else {
            return false;
        };
        let was_hovering = session.hovering();
        let next = session.retarget(drop_item, point);
        let hovering = next.hovering();
        self.commit(InteractionState::Dragging(next));

        let hover_event = match (was_hovering, hovering) {
            (false, true) => Some(DragEvent::HoverStart),
            (true, false) => Some(DragEvent::HoverEnd),
            _ => None,
        };
        if let Some(event) = hover_event {
            tracing::debug!(%event, x = point.x, y = point.y, "Hover changed");
        }

        let events: Vec<DragEvent> = moved
            .then_some(DragEvent::DragMove)
            .into_iter()
            .chain(hover_event)
            .collect();
        self.emit(&events);
        true
    }
}
