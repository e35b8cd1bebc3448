//! Host platform boundary for hit testing.
//!
//! The manager never walks a widget tree itself. It asks a [`Surface`] for
//! the stack of elements under a point and for an element's bounding box,
//! and applies its own registry policy on top of that answer.
//!
//! [`LayoutSurface`] is a self-contained implementation backed by the
//! R-tree [`SpatialIndex`], used by headless hosts and by the test suite.

use crate::spatial_index::SpatialIndex;
use crate::types::{ElementId, Point, Rect};
use std::collections::HashMap;

/// Platform queries needed by the interaction state machine.
pub trait Surface {
    /// Visible elements under `point` (client coordinates), topmost first.
    ///
    /// Elements that are not rendered, scrolled out of the viewport, or
    /// otherwise not hittable must be excluded.
    fn elements_at(&self, point: Point) -> Vec<ElementId>;

    /// Current bounding box of `element` in client coordinates.
    fn bounding_rect(&self, element: ElementId) -> Option<Rect>;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn elements_at(&self, point: Point) -> Vec<ElementId> {
        (**self).elements_at(point)
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        (**self).bounding_rect(element)
    }
}

// ============================================================================
// LayoutSurface
// ============================================================================

/// How an element is positioned relative to scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Laid out in document space; moves when the viewport scrolls
    #[default]
    Document,
    /// Pinned to the viewport; unaffected by scrolling
    Viewport,
}

/// Layout record for one element.
#[derive(Clone, Copy, Debug)]
pub struct LayoutNode {
    /// Rectangle in document space (or viewport space for [`Anchor::Viewport`])
    pub rect: Rect,
    pub z_index: i32,
    pub anchor: Anchor,
    pub hidden: bool,
    /// Paint order; later nodes paint over earlier ones at equal z-index
    order: u64,
}

/// A flat, scrollable layout of rectangles with z-ordering.
pub struct LayoutSurface {
    viewport: (f32, f32),
    scroll: Point,
    nodes: HashMap<ElementId, LayoutNode>,
    document_index: SpatialIndex,
    viewport_index: SpatialIndex,
    next_order: u64,
}

impl LayoutSurface {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport: (viewport_width, viewport_height),
            scroll: Point::ZERO,
            nodes: HashMap::new(),
            document_index: SpatialIndex::new(),
            viewport_index: SpatialIndex::new(),
            next_order: 0,
        }
    }

    /// Add or replace a document-anchored element at z-index 0.
    pub fn insert(&mut self, element: ElementId, rect: Rect) {
        self.insert_with(element, rect, 0, Anchor::Document);
    }

    /// Add or replace an element. Replacing moves it to the top of its z-index.
    pub fn insert_with(&mut self, element: ElementId, rect: Rect, z_index: i32, anchor: Anchor) {
        self.unindex(element);
        let order = self.next_order;
        self.next_order += 1;
        let node = LayoutNode {
            rect,
            z_index,
            anchor,
            hidden: false,
            order,
        };
        self.index_for(anchor).insert(element, rect);
        self.nodes.insert(element, node);
    }

    /// Move an element without changing its paint order.
    pub fn set_rect(&mut self, element: ElementId, rect: Rect) -> bool {
        let Some(node) = self.nodes.get_mut(&element) else {
            return false;
        };
        node.rect = rect;
        let anchor = node.anchor;
        self.index_for(anchor).insert(element, rect);
        true
    }

    pub fn set_hidden(&mut self, element: ElementId, hidden: bool) -> bool {
        match self.nodes.get_mut(&element) {
            Some(node) => {
                node.hidden = hidden;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        self.unindex(element);
        self.nodes.remove(&element).is_some()
    }

    pub fn node(&self, element: ElementId) -> Option<&LayoutNode> {
        self.nodes.get(&element)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll
    }

    pub fn scroll_to(&mut self, offset: Point) {
        self.scroll = offset;
    }

    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll = self.scroll + Point::new(dx, dy);
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.viewport.0, self.viewport.1)
    }

    fn index_for(&mut self, anchor: Anchor) -> &mut SpatialIndex {
        match anchor {
            Anchor::Document => &mut self.document_index,
            Anchor::Viewport => &mut self.viewport_index,
        }
    }

    fn unindex(&mut self, element: ElementId) {
        if let Some(anchor) = self.nodes.get(&element).map(|node| node.anchor) {
            self.index_for(anchor).remove(element);
        }
    }
}

impl Surface for LayoutSurface {
    fn elements_at(&self, point: Point) -> Vec<ElementId> {
        if !self.viewport_rect().contains(point) {
            return Vec::new();
        }

        let document_point = point + self.scroll;
        let mut hits: Vec<(ElementId, &LayoutNode)> = self
            .viewport_index
            .query_point(point)
            .into_iter()
            .chain(self.document_index.query_point(document_point))
            .filter_map(|element| self.nodes.get(&element).map(|node| (element, node)))
            .filter(|(_, node)| !node.hidden)
            .collect();

        hits.sort_by(|(_, a), (_, b)| b.z_index.cmp(&a.z_index).then(b.order.cmp(&a.order)));
        hits.into_iter().map(|(element, _)| element).collect()
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        let node = self.nodes.get(&element)?;
        Some(match node.anchor {
            Anchor::Document => node.rect.offset(Point::ZERO - self.scroll),
            Anchor::Viewport => node.rect,
        })
    }
}
