//! View-binding helper that pairs registration with an element's lifecycle.
//!
//! A view calls [`ItemBinding::sync`] on every render with the element it
//! currently renders (if any) and its binding configuration. The binding
//! re-registers only when the element or the dependency key changes, and
//! unregisters the old registration first. Payload and disabled flag are
//! captured at registration time: to push a new payload into the registry,
//! change the dependency key.
//!
//! Call [`ItemBinding::release`] when the view is torn down; a binding that
//! is dropped without releasing leaves its registration in the manager.

use crate::manager::DragDropManager;
use crate::types::{ElementId, Item, ItemKey, ItemKind};
use std::marker::PhantomData;

/// Per-render configuration of a binding.
#[derive(Debug, Clone)]
pub struct BindingConfig<P, D = ()> {
    pub payload: P,
    pub disabled: bool,
    /// Dependency key; a change forces re-registration
    pub deps: D,
}

impl<P> BindingConfig<P, ()> {
    pub fn new(payload: P) -> Self {
        Self {
            payload,
            disabled: false,
            deps: (),
        }
    }
}

impl<P, D> BindingConfig<P, D> {
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn deps<E>(self, deps: E) -> BindingConfig<P, E> {
        BindingConfig {
            payload: self.payload,
            disabled: self.disabled,
            deps,
        }
    }
}

#[derive(Debug)]
struct Bound<D> {
    element: ElementId,
    deps: D,
    key: ItemKey,
}

#[derive(Debug)]
pub struct ItemBinding<P, D = ()> {
    kind: ItemKind,
    bound: Option<Bound<D>>,
    _payload: PhantomData<fn() -> P>,
}

impl<P, D: PartialEq> ItemBinding<P, D> {
    pub fn draggable() -> Self {
        Self::new(ItemKind::Draggable)
    }

    pub fn droppable() -> Self {
        Self::new(ItemKind::Droppable)
    }

    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            bound: None,
            _payload: PhantomData,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn key(&self) -> Option<ItemKey> {
        self.bound.as_ref().map(|bound| bound.key)
    }

    pub fn element(&self) -> Option<ElementId> {
        self.bound.as_ref().map(|bound| bound.element)
    }

    /// Bring the registration in line with this render.
    /// Returns `true` if the registry was touched.
    pub fn sync(
        &mut self,
        manager: &mut DragDropManager<P>,
        element: Option<ElementId>,
        config: BindingConfig<P, D>,
    ) -> bool {
        let unchanged = match (&self.bound, element) {
            (Some(bound), Some(element)) => bound.element == element && bound.deps == config.deps,
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }

        self.release(manager);

        let Some(element) = element else {
            return true;
        };
        let item = Item::new(element, config.payload).disabled(config.disabled);
        let key = match self.kind {
            ItemKind::Draggable => manager.register_draggable(item),
            ItemKind::Droppable => manager.register_droppable(item),
        };
        tracing::trace!(kind = self.kind.as_str(), ?element, key = key.raw(), "Binding registered");
        self.bound = Some(Bound {
            element,
            deps: config.deps,
            key,
        });
        true
    }

    /// Unregister the current registration, if any.
    pub fn release(&mut self, manager: &mut DragDropManager<P>) -> bool {
        let Some(bound) = self.bound.take() else {
            return false;
        };
        match self.kind {
            ItemKind::Draggable => manager.unregister_draggable(bound.key),
            ItemKind::Droppable => manager.unregister_droppable(bound.key),
        }
    }
}
