//! Pointer up handling - finalize the drag and resolve the drop.

use crate::bus::DragEvent;
use crate::input::state::InteractionState;
use crate::manager::DragDropManager;
use crate::profile_scope;
use crate::surface::Surface;
use crate::types::ItemKind;

impl<P> DragDropManager<P> {
    /// End the current drag. No-op while idle.
    ///
    /// Drop targets are re-tested one last time at the last reduced pointer
    /// position. The previous snapshot becomes that final dragging state so
    /// `drag_end`/`drop` handlers can read where the drag finished.
    pub fn pointer_up<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
        profile_scope!("pointer_up");

        let Some(pointer) = self.state.pointer() else {
            return false;
        };
        let drop_item = self.hit_test(ItemKind::Droppable, &surface.elements_at(pointer));
        let Some(session) = self.state.session() else {
            return false;
        };
        let last = session.retarget(drop_item, pointer);
        let dropped = last.hovering();

        tracing::debug!(
            element = ?last.drag_item.element(),
            target = ?last.drop_item.as_ref().map(|drop| drop.element()),
            x = pointer.x,
            y = pointer.y,
            dropped,
            "Drag ended"
        );

        self.prev_state = InteractionState::Dragging(last);
        self.state = InteractionState::Idle;

        if dropped {
            self.emit(&[DragEvent::DragEnd, DragEvent::HoverEnd, DragEvent::Drop]);
        } else {
            self.emit(&[DragEvent::DragEnd]);
        }
        true
    }
}
