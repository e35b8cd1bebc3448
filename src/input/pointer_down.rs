//! Pointer down handling - drag start.

use crate::bus::DragEvent;
use crate::input::state::{DragOrigin, DragSession, InteractionState};
use crate::manager::DragDropManager;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::{ItemKind, Point};

impl<P> DragDropManager<P> {
    /// Start a drag if an enabled draggable is under `point`.
    ///
    /// Returns `false` (and changes nothing) when nothing draggable was hit.
    /// A pointer down during a drag starts a fresh drag.
    pub fn pointer_down<S: Surface + ?Sized>(&mut self, surface: &S, point: Point) -> bool {
        profile_scope!("pointer_down");

        let stack = surface.elements_at(point);
        let Some(drag_item) = self.hit_test(ItemKind::Draggable, &stack) else {
            tracing::trace!(x = point.x, y = point.y, "Pointer down missed every draggable");
            return false;
        };
        let drop_item = self.hit_test(ItemKind::Droppable, &stack);

        let element_rect = surface.bounding_rect(drag_item.element());
        if element_rect.is_none() {
            tracing::warn!(
                element = ?drag_item.element(),
                "Drag started on an element without a bounding box; using pointer position"
            );
        }

        let hovering = drop_item.is_some();
        tracing::debug!(
            element = ?drag_item.element(),
            key = drag_item.key.raw(),
            x = point.x,
            y = point.y,
            hovering,
            "Drag started"
        );

        self.commit(InteractionState::Dragging(DragSession {
            origin: DragOrigin {
                tracked: drag_item.clone(),
                element_rect,
            },
            drag_item,
            drop_item,
            initial_pointer: point,
            pointer: point,
        }));

        if hovering {
            self.emit(&[DragEvent::DragStart, DragEvent::HoverStart]);
        } else {
            self.emit(&[DragEvent::DragStart]);
        }
        true
    }
}
