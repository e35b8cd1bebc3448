//! Subscription/publish bus.
//!
//! A [`Listener`] is a record of optional handlers, one per lifecycle event,
//! plus an `any` handler that runs after the event-specific handler on every
//! publish. Each handler receives the new and the previous derived state.
//!
//! Subscribing and unsubscribing go through `&mut` access to the bus, so the
//! listener set cannot change while an event is being delivered: a listener
//! added by a handler's side effects takes effect from the next event.

use crate::derived::DerivedState;
use std::collections::BTreeMap;
use std::fmt;

/// Handler signature: `(state, prev_state)`.
pub type Handler<P> = Box<dyn FnMut(&DerivedState<P>, &DerivedState<P>)>;

/// Lifecycle events published by the manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragEvent {
    DragStart,
    DragMove,
    DragEnd,
    HoverStart,
    HoverEnd,
    Drop,
}

impl DragEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            DragEvent::DragStart => "drag_start",
            DragEvent::DragMove => "drag_move",
            DragEvent::DragEnd => "drag_end",
            DragEvent::HoverStart => "hover_start",
            DragEvent::HoverEnd => "hover_end",
            DragEvent::Drop => "drop",
        }
    }
}

impl fmt::Display for DragEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A set of optional lifecycle handlers.
///
/// # Example
/// ```ignore
/// let listener = Listener::new()
///     .on_drop(|state, prev| println!("dropped {:?} at {:?}", prev.drop_payload, prev.pointer_position))
///     .on_any(|state, _| redraw(state));
/// ```
pub struct Listener<P> {
    drag_start: Option<Handler<P>>,
    drag_move: Option<Handler<P>>,
    drag_end: Option<Handler<P>>,
    hover_start: Option<Handler<P>>,
    hover_end: Option<Handler<P>>,
    drop: Option<Handler<P>>,
    any: Option<Handler<P>>,
}

impl<P> Default for Listener<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for Listener<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("drag_start", &self.drag_start.is_some())
            .field("drag_move", &self.drag_move.is_some())
            .field("drag_end", &self.drag_end.is_some())
            .field("hover_start", &self.hover_start.is_some())
            .field("hover_end", &self.hover_end.is_some())
            .field("drop", &self.drop.is_some())
            .field("any", &self.any.is_some())
            .finish()
    }
}

impl<P> Listener<P> {
    pub fn new() -> Self {
        Self {
            drag_start: None,
            drag_move: None,
            drag_end: None,
            hover_start: None,
            hover_end: None,
            drop: None,
            any: None,
        }
    }

    pub fn on_drag_start(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.drag_start = Some(Box::new(f));
        self
    }

    pub fn on_drag_move(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.drag_move = Some(Box::new(f));
        self
    }

    pub fn on_drag_end(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.drag_end = Some(Box::new(f));
        self
    }

    pub fn on_hover_start(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.hover_start = Some(Box::new(f));
        self
    }

    pub fn on_hover_end(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.hover_end = Some(Box::new(f));
        self
    }

    pub fn on_drop(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.drop = Some(Box::new(f));
        self
    }

    /// Runs after the event-specific handler on every event.
    pub fn on_any(mut self, f: impl FnMut(&DerivedState<P>, &DerivedState<P>) + 'static) -> Self {
        self.any = Some(Box::new(f));
        self
    }

    /// Take the `any` handler out, leaving `None`. Used by wrappers that
    /// chain their own `any` behaviour after the caller's.
    pub(crate) fn take_any(&mut self) -> Option<Handler<P>> {
        self.any.take()
    }

    fn handler_mut(&mut self, event: DragEvent) -> Option<&mut Handler<P>> {
        match event {
            DragEvent::DragStart => self.drag_start.as_mut(),
            DragEvent::DragMove => self.drag_move.as_mut(),
            DragEvent::DragEnd => self.drag_end.as_mut(),
            DragEvent::HoverStart => self.hover_start.as_mut(),
            DragEvent::HoverEnd => self.hover_end.as_mut(),
            DragEvent::Drop => self.drop.as_mut(),
        }
    }

    fn deliver(&mut self, event: DragEvent, state: &DerivedState<P>, prev: &DerivedState<P>) {
        if let Some(handler) = self.handler_mut(event) {
            handler(state, prev);
        }
        if let Some(any) = self.any.as_mut() {
            any(state, prev);
        }
    }
}

/// The set of current listeners, delivered in subscription order.
pub struct SubscriberBus<P> {
    listeners: BTreeMap<SubscriptionId, Listener<P>>,
    next_id: u64,
}

impl<P> Default for SubscriberBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SubscriberBus<P> {
    pub fn new() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self, listener: Listener<P>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, listener);
        id
    }

    /// Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener: its handler for `event`, then its `any` handler.
    pub fn publish(&mut self, event: DragEvent, state: &DerivedState<P>, prev: &DerivedState<P>) {
        tracing::trace!(%event, listeners = self.listeners.len(), "Publishing");
        for listener in self.listeners.values_mut() {
            listener.deliver(event, state, prev);
        }
    }
}
