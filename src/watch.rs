//! Field-filtered reactive adapter over the bus.
//!
//! A [`StateWatcher`] keeps its own copy of the derived state and a revision
//! counter. After the caller's hooks have run for an event, the copy is
//! replaced (and the revision bumped) only if one of the watched fields
//! differs between the new and previous state. A view polls `revision()`
//! and re-renders when it moves.
//!
//! The comparison cost is paid only by watchers; plain listeners are
//! delivered without any diffing.

use crate::bus::{Listener, SubscriptionId};
use crate::derived::{DerivedField, DerivedState};
use crate::manager::DragDropManager;
use parking_lot::Mutex;
use std::sync::Arc;

struct Watched<P> {
    state: DerivedState<P>,
    revision: u64,
}

pub struct StateWatcher<P> {
    id: SubscriptionId,
    fields: Arc<[DerivedField]>,
    shared: Arc<Mutex<Watched<P>>>,
}

impl<P: PartialEq + 'static> StateWatcher<P> {
    /// Subscribe a watcher on `manager`. `hooks` run first on every event.
    pub fn attach(manager: &mut DragDropManager<P>, fields: &[DerivedField], mut hooks: Listener<P>) -> Self {
        let fields: Arc<[DerivedField]> = Arc::from(fields);
        let shared = Arc::new(Mutex::new(Watched {
            state: manager.current_derived_state(),
            revision: 0,
        }));

        let mut user_any = hooks.take_any();
        let watched_fields = Arc::clone(&fields);
        let sink = Arc::clone(&shared);
        let listener = hooks.on_any(move |state, prev| {
            if let Some(any) = user_any.as_mut() {
                any(state, prev);
            }
            if state.differs_in(prev, &watched_fields) {
                let mut watched = sink.lock();
                watched.state = state.clone();
                watched.revision += 1;
            }
        });

        let id = manager.subscribe(listener);
        tracing::debug!(?id, fields = ?fields, "Attached state watcher");
        Self { id, fields, shared }
    }
}

impl<P> StateWatcher<P> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn fields(&self) -> &[DerivedField] {
        &self.fields
    }

    /// Latest state that changed a watched field.
    pub fn state(&self) -> DerivedState<P> {
        self.shared.lock().state.clone()
    }

    /// Number of downstream updates so far.
    pub fn revision(&self) -> u64 {
        self.shared.lock().revision
    }

    /// Cheap clonable read handle for another owner (e.g. a render thread).
    pub fn reader(&self) -> WatchReader<P> {
        WatchReader {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Unsubscribe. Readers keep the last published state.
    pub fn detach(self, manager: &mut DragDropManager<P>) -> bool {
        manager.unsubscribe(self.id)
    }
}

/// Read-only view of a watcher's state.
pub struct WatchReader<P> {
    shared: Arc<Mutex<Watched<P>>>,
}

impl<P> Clone for WatchReader<P> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<P> WatchReader<P> {
    pub fn state(&self) -> DerivedState<P> {
        self.shared.lock().state.clone()
    }

    pub fn revision(&self) -> u64 {
        self.shared.lock().revision
    }
}
