//! The drag and drop interaction manager.
//!
//! [`DragDropManager`] owns the item registry, the current and previous
//! interaction snapshots, the subscriber bus, and the frame coalescer. It is
//! a plain value: create one per UI root (or per test) and feed it input.
//!
//! ## Wiring
//!
//! ```ignore
//! let mut manager = DragDropManager::<Card>::new();
//! let key = manager.register_draggable(Item::new(card_element, card));
//! manager.subscribe(Listener::new().on_drop(|_, prev| handle_drop(prev)));
//!
//! // In the host event loop:
//! manager.handle_event(&surface, InputEvent::PointerDown(point));
//! // Once per displayed frame:
//! manager.run_frame(&surface);
//! ```
//!
//! The reducers live in [`crate::input`].

use crate::bus::{DragEvent, Listener, SubscriberBus, SubscriptionId};
use crate::config::ManagerConfig;
use crate::derived::{DerivedField, DerivedState};
use crate::input::{FrameCoalescer, InputEvent, InteractionState, Reducer};
use crate::perf::{HitTestProfiler, measure};
use crate::registry::ItemRegistry;
use crate::surface::Surface;
use crate::types::{DragItem, DropItem, ElementId, ItemKey, ItemKind, Tracked};
use crate::watch::StateWatcher;

pub struct DragDropManager<P> {
    config: ManagerConfig,
    registry: ItemRegistry<P>,
    pub(crate) state: InteractionState<P>,
    pub(crate) prev_state: InteractionState<P>,
    bus: SubscriberBus<P>,
    frame: FrameCoalescer<Reducer, InputEvent>,
    hit_profiler: HitTestProfiler,
}

impl<P> Default for DragDropManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DragDropManager<P> {
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            config,
            registry: ItemRegistry::new(),
            state: InteractionState::Idle,
            prev_state: InteractionState::Idle,
            bus: SubscriberBus::new(),
            frame: FrameCoalescer::new(),
            hit_profiler: HitTestProfiler::new(),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Return to the idle snapshot and drop pending frame work.
    /// Registrations and subscriptions are kept.
    pub fn reset(&mut self) {
        tracing::debug!(was_dragging = self.state.is_dragging(), "Resetting interaction state");
        self.state = InteractionState::Idle;
        self.prev_state = InteractionState::Idle;
        self.frame.clear();
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a draggable item.
    ///
    /// If a drag is in progress on the same element, the running drag picks up
    /// this registration (new payload / disabled flag) without changing its
    /// starting snapshot. Each registration must be paired with
    /// [`unregister_draggable`](Self::unregister_draggable).
    pub fn register_draggable(&mut self, item: DragItem<P>) -> ItemKey {
        let tracked = self.registry.register(ItemKind::Draggable, item);
        self.hot_swap_drag_item(&tracked);
        tracked.key
    }

    /// Removing the dragged item's registration does not end the drag.
    pub fn unregister_draggable(&mut self, key: ItemKey) -> bool {
        self.registry.unregister(ItemKind::Draggable, key)
    }

    pub fn register_droppable(&mut self, item: DropItem<P>) -> ItemKey {
        self.registry.register(ItemKind::Droppable, item).key
    }

    pub fn unregister_droppable(&mut self, key: ItemKey) -> bool {
        self.registry.unregister(ItemKind::Droppable, key)
    }

    pub fn registry(&self) -> &ItemRegistry<P> {
        &self.registry
    }

    fn hot_swap_drag_item(&mut self, tracked: &Tracked<P>) {
        let swapped = match &self.state {
            InteractionState::Dragging(session) if session.drag_item.element() == tracked.element() => {
                Some(session.with_drag_item(tracked.clone()))
            }
            _ => None,
        };
        if let Some(session) = swapped {
            tracing::debug!(element = ?tracked.element(), key = tracked.key.raw(), "Dragged item re-registered");
            self.state = InteractionState::Dragging(session);
        }
    }

    // ========================================================================
    // Subscription
    // ========================================================================

    pub fn subscribe(&mut self, listener: Listener<P>) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.bus.len()
    }

    /// Attach a watcher that updates only when one of `fields` changes.
    pub fn watch(&mut self, fields: &[DerivedField], hooks: Listener<P>) -> StateWatcher<P>
    where
        P: PartialEq + 'static,
    {
        StateWatcher::attach(self, fields, hooks)
    }

    /// Attach a watcher that updates when any field changes.
    pub fn watch_all(&mut self, hooks: Listener<P>) -> StateWatcher<P>
    where
        P: PartialEq + 'static,
    {
        StateWatcher::attach(self, &DerivedField::ALL, hooks)
    }

    // ========================================================================
    // Read API
    // ========================================================================

    pub fn current_derived_state(&self) -> DerivedState<P> {
        DerivedState::from_state(&self.state)
    }

    pub fn previous_derived_state(&self) -> DerivedState<P> {
        DerivedState::from_state(&self.prev_state)
    }

    pub fn state(&self) -> &InteractionState<P> {
        &self.state
    }

    pub fn prev_state(&self) -> &InteractionState<P> {
        &self.prev_state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn hit_test_stats(&self) -> &HitTestProfiler {
        &self.hit_profiler
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Feed one raw input event.
    ///
    /// Pointer down/up reduce immediately. Moves and scrolls are held until
    /// [`run_frame`](Self::run_frame) unless coalescing is disabled for them.
    /// Returns `true` if the event produced a transition right away.
    pub fn handle_event<S: Surface + ?Sized>(&mut self, surface: &S, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(point) => self.pointer_down(surface, point),
            InputEvent::PointerUp => self.pointer_up(surface),
            InputEvent::PointerMove(_) if self.config.coalesce_pointer_moves => {
                self.schedule(Reducer::PointerMove, event);
                false
            }
            InputEvent::PointerMove(point) => self.pointer_move(surface, point),
            InputEvent::Scroll if self.config.coalesce_scroll => {
                self.schedule(Reducer::Scroll, event);
                false
            }
            InputEvent::Scroll => self.scroll(surface),
        }
    }

    /// Reduce the coalesced work for this frame. Returns the number of
    /// pending reductions that produced a transition.
    pub fn run_frame<S: Surface + ?Sized>(&mut self, surface: &S) -> usize {
        let pending = self.frame.drain();
        let mut transitions = 0;
        for (_, event) in pending {
            let changed = match event {
                InputEvent::PointerMove(point) => self.pointer_move(surface, point),
                InputEvent::Scroll => self.scroll(surface),
                InputEvent::PointerDown(_) | InputEvent::PointerUp => false,
            };
            if changed {
                transitions += 1;
            }
        }
        transitions
    }

    pub fn has_pending_frame(&self) -> bool {
        !self.frame.is_empty()
    }

    fn schedule(&mut self, reducer: Reducer, event: InputEvent) {
        if self.frame.schedule(reducer, event).is_some() {
            tracing::trace!(?reducer, "Superseded pending frame work");
        }
    }

    // ========================================================================
    // Reducer Support
    // ========================================================================

    pub(crate) fn hit_test(&mut self, kind: ItemKind, stack: &[ElementId]) -> Option<Tracked<P>> {
        let (result, elapsed_ms) = measure(|| self.registry.hit_test(kind, stack));
        self.hit_profiler
            .record(result.items_tested, elapsed_ms, self.config.slow_hit_test_ms);
        tracing::trace!(
            kind = kind.as_str(),
            stack_depth = stack.len(),
            items_tested = result.items_tested,
            hit = ?result.hit.as_ref().map(Tracked::element),
            "Hit test"
        );
        result.hit
    }

    /// Install `next` as the current snapshot, keeping the old one as previous.
    pub(crate) fn commit(&mut self, next: InteractionState<P>) {
        self.prev_state = std::mem::replace(&mut self.state, next);
    }

    /// Publish `events` in order against the committed snapshot pair.
    pub(crate) fn emit(&mut self, events: &[DragEvent]) {
        if events.is_empty() || self.bus.is_empty() {
            return;
        }
        let state = DerivedState::from_state(&self.state);
        let prev = DerivedState::from_state(&self.prev_state);
        for event in events {
            self.bus.publish(*event, &state, &prev);
        }
    }
}
