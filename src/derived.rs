//! Derived state: the read-only view of a snapshot handed to subscribers.
//!
//! Derived state is recomputed from an [`InteractionState`] on demand and is
//! never stored by the manager. Geometry follows the pointer rigidly from
//! the element's position at drag start:
//!
//! ```text
//! displacement     = pointer_position - initial_pointer_position
//! element_position = initial_element_position + displacement
//! ```

use crate::input::InteractionState;
use crate::types::Point;
use serde::{Serialize, Serializer};
use std::sync::Arc;

#[derive(Debug)]
pub struct DerivedState<P> {
    pub dragging: bool,
    pub hovering: bool,
    pub drag_payload: Option<Arc<P>>,
    pub drop_payload: Option<Arc<P>>,
    pub initial_pointer_position: Option<Point>,
    pub pointer_position: Option<Point>,
    pub initial_element_position: Option<Point>,
    pub element_position: Option<Point>,
    pub displacement: Option<Point>,
}

impl<P> DerivedState<P> {
    /// Derived state of the idle snapshot.
    pub fn idle() -> Self {
        Self {
            dragging: false,
            hovering: false,
            drag_payload: None,
            drop_payload: None,
            initial_pointer_position: None,
            pointer_position: None,
            initial_element_position: None,
            element_position: None,
            displacement: None,
        }
    }

    pub fn from_state(state: &InteractionState<P>) -> Self {
        let Some(session) = state.session() else {
            return Self::idle();
        };

        let displacement = session.displacement();
        let initial_element_position = session.initial_element_position();

        Self {
            dragging: true,
            hovering: session.hovering(),
            drag_payload: Some(Arc::clone(session.drag_item.payload())),
            drop_payload: session
                .drop_item
                .as_ref()
                .map(|drop| Arc::clone(drop.payload())),
            initial_pointer_position: Some(session.initial_pointer),
            pointer_position: Some(session.pointer),
            initial_element_position: Some(initial_element_position),
            element_position: Some(initial_element_position + displacement),
            displacement: Some(displacement),
        }
    }
}

impl<P> Default for DerivedState<P> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<P> Clone for DerivedState<P> {
    fn clone(&self) -> Self {
        Self {
            dragging: self.dragging,
            hovering: self.hovering,
            drag_payload: self.drag_payload.clone(),
            drop_payload: self.drop_payload.clone(),
            initial_pointer_position: self.initial_pointer_position,
            pointer_position: self.pointer_position,
            initial_element_position: self.initial_element_position,
            element_position: self.element_position,
            displacement: self.displacement,
        }
    }
}

impl<P: PartialEq> PartialEq for DerivedState<P> {
    fn eq(&self, other: &Self) -> bool {
        DerivedField::ALL
            .iter()
            .all(|field| !self.field_differs(other, *field))
    }
}

impl<P: Serialize> Serialize for DerivedState<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DerivedState", 9)?;
        state.serialize_field("dragging", &self.dragging)?;
        state.serialize_field("hovering", &self.hovering)?;
        state.serialize_field("drag_payload", &self.drag_payload.as_deref())?;
        state.serialize_field("drop_payload", &self.drop_payload.as_deref())?;
        state.serialize_field("initial_pointer_position", &self.initial_pointer_position)?;
        state.serialize_field("pointer_position", &self.pointer_position)?;
        state.serialize_field("initial_element_position", &self.initial_element_position)?;
        state.serialize_field("element_position", &self.element_position)?;
        state.serialize_field("displacement", &self.displacement)?;
        state.end()
    }
}

// ============================================================================
// Field Selection
// ============================================================================

/// One field of [`DerivedState`], for listeners that only react to a subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DerivedField {
    Dragging,
    Hovering,
    DragPayload,
    DropPayload,
    InitialPointerPosition,
    PointerPosition,
    InitialElementPosition,
    ElementPosition,
    Displacement,
}

impl DerivedField {
    pub const ALL: [DerivedField; 9] = [
        DerivedField::Dragging,
        DerivedField::Hovering,
        DerivedField::DragPayload,
        DerivedField::DropPayload,
        DerivedField::InitialPointerPosition,
        DerivedField::PointerPosition,
        DerivedField::InitialElementPosition,
        DerivedField::ElementPosition,
        DerivedField::Displacement,
    ];
}

impl<P: PartialEq> DerivedState<P> {
    /// Value comparison of one field. Payloads compare by content.
    pub fn field_differs(&self, other: &Self, field: DerivedField) -> bool {
        match field {
            DerivedField::Dragging => self.dragging != other.dragging,
            DerivedField::Hovering => self.hovering != other.hovering,
            DerivedField::DragPayload => self.drag_payload != other.drag_payload,
            DerivedField::DropPayload => self.drop_payload != other.drop_payload,
            DerivedField::InitialPointerPosition => {
                self.initial_pointer_position != other.initial_pointer_position
            }
            DerivedField::PointerPosition => self.pointer_position != other.pointer_position,
            DerivedField::InitialElementPosition => {
                self.initial_element_position != other.initial_element_position
            }
            DerivedField::ElementPosition => self.element_position != other.element_position,
            DerivedField::Displacement => self.displacement != other.displacement,
        }
    }

    /// True if any of `fields` differs between the two states.
    pub fn differs_in(&self, other: &Self, fields: &[DerivedField]) -> bool {
        fields.iter().any(|field| self.field_differs(other, *field))
    }

    pub fn changed_fields(&self, other: &Self) -> Vec<DerivedField> {
        DerivedField::ALL
            .into_iter()
            .filter(|field| self.field_differs(other, *field))
            .collect()
    }
}
