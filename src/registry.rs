//! Item registry: the draggable and droppable collections and the hit-test policy.
//!
//! Entries are keyed by registration ([`ItemKey`]), not by element, because a
//! view may register a fresh item for the same element on every render.
//! Iteration follows registration order.
//!
//! Nothing here owns the elements. A view that forgets to unregister leaves a
//! stale entry that keeps participating in hit tests, so registration and
//! unregistration must be paired by the caller (see [`crate::binding`]).

use crate::types::{ElementId, Item, ItemKey, ItemKind, Tracked};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Result of a hit test: the matched registration, if any, and how many
/// registry entries were compared to find it.
#[derive(Debug)]
pub struct HitResult<P> {
    pub hit: Option<Tracked<P>>,
    pub items_tested: usize,
}

pub struct ItemRegistry<P> {
    draggables: BTreeMap<ItemKey, Arc<Item<P>>>,
    droppables: BTreeMap<ItemKey, Arc<Item<P>>>,
    next_key: u64,
}

impl<P> Default for ItemRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ItemRegistry<P> {
    pub fn new() -> Self {
        Self {
            draggables: BTreeMap::new(),
            droppables: BTreeMap::new(),
            next_key: 0,
        }
    }

    fn collection(&self, kind: ItemKind) -> &BTreeMap<ItemKey, Arc<Item<P>>> {
        match kind {
            ItemKind::Draggable => &self.draggables,
            ItemKind::Droppable => &self.droppables,
        }
    }

    fn collection_mut(&mut self, kind: ItemKind) -> &mut BTreeMap<ItemKey, Arc<Item<P>>> {
        match kind {
            ItemKind::Draggable => &mut self.draggables,
            ItemKind::Droppable => &mut self.droppables,
        }
    }

    /// Add an item and return the registration that now tracks it.
    pub fn register(&mut self, kind: ItemKind, item: Item<P>) -> Tracked<P> {
        let key = ItemKey(self.next_key);
        self.next_key += 1;
        let item = Arc::new(item);
        self.collection_mut(kind).insert(key, Arc::clone(&item));
        Tracked { key, item }
    }

    /// Remove a registration. Unknown or already removed keys are ignored.
    pub fn unregister(&mut self, kind: ItemKind, key: ItemKey) -> bool {
        self.collection_mut(kind).remove(&key).is_some()
    }

    pub fn get(&self, kind: ItemKind, key: ItemKey) -> Option<&Arc<Item<P>>> {
        self.collection(kind).get(&key)
    }

    pub fn contains(&self, kind: ItemKind, key: ItemKey) -> bool {
        self.collection(kind).contains_key(&key)
    }

    pub fn len(&self, kind: ItemKind) -> usize {
        self.collection(kind).len()
    }

    pub fn is_empty(&self, kind: ItemKind) -> bool {
        self.collection(kind).is_empty()
    }

    /// Find the first enabled item of `kind` bound to an element of `stack`.
    ///
    /// `stack` is topmost first, so overlap resolves to the topmost element;
    /// among several registrations of one element the earliest wins.
    pub fn hit_test(&self, kind: ItemKind, stack: &[ElementId]) -> HitResult<P> {
        let items = self.collection(kind);
        let mut items_tested = 0;

        for element in stack {
            for (key, item) in items {
                items_tested += 1;
                if item.element == *element && !item.disabled {
                    return HitResult {
                        hit: Some(Tracked {
                            key: *key,
                            item: Arc::clone(item),
                        }),
                        items_tested,
                    };
                }
            }
        }

        HitResult {
            hit: None,
            items_tested,
        }
    }
}
