//! Core types for the drag and drop system.
//!
//! This module defines the geometry primitives and the registry item types
//! shared by the surface, the registry, and the interaction state machine.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use std::sync::Arc;

// ============================================================================
// Geometry
// ============================================================================

/// A position in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned rectangle: top-left origin plus (width, height).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: (f32, f32),
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: (width, height),
        }
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.origin.x + self.size.0, self.origin.y + self.size.1)
    }

    /// Edges are inclusive.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// Translate the rectangle by `delta`.
    #[inline]
    pub fn offset(&self, delta: Point) -> Rect {
        Rect {
            origin: self.origin + delta,
            size: self.size,
        }
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Opaque, non-owning handle to a host UI element.
///
/// The registry compares elements by identity only; the host controls the
/// lifetime of whatever the id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Identity of a single registration.
///
/// Registering the same element twice yields two distinct keys, so a view
/// that re-registers on every render can unregister exactly what it added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(pub(crate) u64);

impl ItemKey {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Which registry collection an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Draggable,
    Droppable,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Draggable => "draggable",
            ItemKind::Droppable => "droppable",
        }
    }
}

// ============================================================================
// Registry Items
// ============================================================================

/// A registered element with an opaque caller payload.
#[derive(Debug)]
pub struct Item<P> {
    pub element: ElementId,
    pub payload: Arc<P>,
    pub disabled: bool,
}

/// An element that can start a drag.
pub type DragItem<P> = Item<P>;

/// An element that can receive a drop.
pub type DropItem<P> = Item<P>;

impl<P> Item<P> {
    pub fn new(element: ElementId, payload: P) -> Self {
        Self {
            element,
            payload: Arc::new(payload),
            disabled: false,
        }
    }

    /// Build an item around an already shared payload.
    pub fn with_shared_payload(element: ElementId, payload: Arc<P>) -> Self {
        Self {
            element,
            payload,
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl<P> Clone for Item<P> {
    fn clone(&self) -> Self {
        Self {
            element: self.element,
            payload: Arc::clone(&self.payload),
            disabled: self.disabled,
        }
    }
}

/// A registration as held by a snapshot: its key plus a shared item.
#[derive(Debug)]
pub struct Tracked<P> {
    pub key: ItemKey,
    pub item: Arc<Item<P>>,
}

impl<P> Tracked<P> {
    #[inline]
    pub fn element(&self) -> ElementId {
        self.item.element
    }

    #[inline]
    pub fn payload(&self) -> &Arc<P> {
        &self.item.payload
    }
}

impl<P> Clone for Tracked<P> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            item: Arc::clone(&self.item),
        }
    }
}
