//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing of element rectangles for hit testing.
//! Point queries are O(log n) instead of scanning every laid-out element.

use crate::types::{ElementId, Point, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an element's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub element: ElementId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(element: ElementId, rect: Rect) -> Self {
        let max = rect.max();
        Self {
            element,
            min_x: rect.origin.x,
            min_y: rect.origin.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.element == other.element
    }
}

/// Spatial index over element rectangles.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ElementId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or move an element.
    pub fn insert(&mut self, element: ElementId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&element) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(element, rect);
        self.tree.insert(entry);
        self.entries.insert(element, entry);
    }

    pub fn remove(&mut self, element: ElementId) -> bool {
        if let Some(entry) = self.entries.remove(&element) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All elements whose rectangle contains the point. Unordered.
    pub fn query_point(&self, point: Point) -> Vec<ElementId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point.x, point.y))
            .map(|entry| entry.element)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
