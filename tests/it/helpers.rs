//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestSurfaceBuilder` - Builder pattern for laying out test elements
//! - `Recorder` - A listener that captures every published event with its states
//! - Element ids and payloads shared by the scenarios

#![allow(dead_code)]

use dropzone::{DerivedState, DragDropManager, DragEvent, Item, Listener, ManagerConfig};
use dropzone::{Anchor, ElementId, LayoutSurface, Rect};
use std::cell::RefCell;
use std::rc::Rc;

pub type Payload = &'static str;

pub const DRAG: ElementId = ElementId(1);
pub const DROP: ElementId = ElementId(2);
pub const OTHER: ElementId = ElementId(3);

/// 20×20 square with its top-left at `(x, y)`.
pub fn square(x: f32, y: f32) -> Rect {
    Rect::new(x, y, 20.0, 20.0)
}

// ============================================================================
// TestSurfaceBuilder - Builder pattern for creating test layouts
// ============================================================================

/// Builder for a [`LayoutSurface`]. Elements are painted in insertion order,
/// so later elements are on top.
///
/// # Example
/// ```ignore
/// let surface = TestSurfaceBuilder::new()
///     .with_element(DRAG, square(0.0, 0.0))
///     .with_element(DROP, square(0.0, 0.0))
///     .build();
/// ```
pub struct TestSurfaceBuilder {
    viewport: (f32, f32),
    elements: Vec<(ElementId, Rect, i32, Anchor)>,
}

impl Default for TestSurfaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSurfaceBuilder {
    pub fn new() -> Self {
        Self {
            viewport: (1000.0, 1000.0),
            elements: Vec::new(),
        }
    }

    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = (width, height);
        self
    }

    pub fn with_element(mut self, element: ElementId, rect: Rect) -> Self {
        self.elements.push((element, rect, 0, Anchor::Document));
        self
    }

    pub fn with_layered_element(mut self, element: ElementId, rect: Rect, z_index: i32) -> Self {
        self.elements.push((element, rect, z_index, Anchor::Document));
        self
    }

    pub fn with_fixed_element(mut self, element: ElementId, rect: Rect) -> Self {
        self.elements.push((element, rect, 0, Anchor::Viewport));
        self
    }

    pub fn build(self) -> LayoutSurface {
        let mut surface = LayoutSurface::new(self.viewport.0, self.viewport.1);
        for (element, rect, z_index, anchor) in self.elements {
            surface.insert_with(element, rect, z_index, anchor);
        }
        surface
    }
}

/// The layout shared by the lifecycle scenarios: a draggable and a droppable
/// stacked at the same spot, with the droppable on top.
pub fn overlapping_surface() -> LayoutSurface {
    TestSurfaceBuilder::new()
        .with_element(DRAG, square(0.0, 0.0))
        .with_element(DROP, square(0.0, 0.0))
        .build()
}

/// Manager that reduces moves and scrolls immediately, with DRAG and DROP registered.
pub fn immediate_manager() -> DragDropManager<Payload> {
    let mut manager = DragDropManager::with_config(ManagerConfig::immediate());
    manager.register_draggable(Item::new(DRAG, "card"));
    manager.register_droppable(Item::new(DROP, "column"));
    manager
}

// ============================================================================
// Recorder - captures published events
// ============================================================================

#[derive(Debug, Clone)]
pub struct Captured {
    pub event: DragEvent,
    pub state: DerivedState<Payload>,
    pub prev: DerivedState<Payload>,
}

/// Listener that records every lifecycle event in delivery order.
#[derive(Clone, Default)]
pub struct Recorder {
    log: Rc<RefCell<Vec<Captured>>>,
    any_calls: Rc<RefCell<usize>>,
}

impl Recorder {
    pub fn attach(manager: &mut DragDropManager<Payload>) -> Self {
        let recorder = Self::default();
        manager.subscribe(recorder.listener());
        recorder
    }

    pub fn listener(&self) -> Listener<Payload> {
        let any_calls = Rc::clone(&self.any_calls);
        Listener::new()
            .on_drag_start(self.capture(DragEvent::DragStart))
            .on_drag_move(self.capture(DragEvent::DragMove))
            .on_drag_end(self.capture(DragEvent::DragEnd))
            .on_hover_start(self.capture(DragEvent::HoverStart))
            .on_hover_end(self.capture(DragEvent::HoverEnd))
            .on_drop(self.capture(DragEvent::Drop))
            .on_any(move |_, _| *any_calls.borrow_mut() += 1)
    }

    fn capture(
        &self,
        event: DragEvent,
    ) -> impl FnMut(&DerivedState<Payload>, &DerivedState<Payload>) + 'static {
        let log = Rc::clone(&self.log);
        move |state, prev| {
            log.borrow_mut().push(Captured {
                event,
                state: state.clone(),
                prev: prev.clone(),
            })
        }
    }

    pub fn events(&self) -> Vec<DragEvent> {
        self.log.borrow().iter().map(|captured| captured.event).collect()
    }

    pub fn count(&self, event: DragEvent) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|captured| captured.event == event)
            .count()
    }

    pub fn log(&self) -> Vec<Captured> {
        self.log.borrow().clone()
    }

    pub fn last(&self) -> Option<Captured> {
        self.log.borrow().last().cloned()
    }

    pub fn any_calls(&self) -> usize {
        *self.any_calls.borrow()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
        *self.any_calls.borrow_mut() = 0;
    }
}
