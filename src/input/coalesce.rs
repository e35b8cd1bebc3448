//! Frame coalescing for high-frequency input.
//!
//! Pointer moves and scrolls can arrive many times per displayed frame, and
//! each reduction hit-tests the registry. [`FrameCoalescer`] holds at most
//! one pending task per key until the host drains it on the next frame:
//!
//! - Scheduling a key that is already pending cancels the old task and
//!   queues the new one behind everything scheduled since.
//! - Draining returns tasks in scheduling order and leaves the queue empty.
//!
//! This is last-event-wins deduplication, not a queue of events.

#[derive(Debug, Clone)]
pub struct FrameCoalescer<K, T> {
    pending: Vec<(K, T)>,
}

impl<K, T> Default for FrameCoalescer<K, T> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq, T> FrameCoalescer<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` for the next frame. Returns the task it superseded, if any.
    pub fn schedule(&mut self, key: K, task: T) -> Option<T> {
        let superseded = self.cancel(&key);
        self.pending.push((key, task));
        superseded
    }

    /// Cancel the pending task for `key`.
    pub fn cancel(&mut self, key: &K) -> Option<T> {
        let index = self.pending.iter().position(|(pending, _)| pending == key)?;
        Some(self.pending.remove(index).1)
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|(pending, _)| pending == key)
    }

    /// Take everything scheduled for this frame, in scheduling order.
    pub fn drain(&mut self) -> Vec<(K, T)> {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
