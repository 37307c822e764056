//! Pending key event queue
//!
//! Captured key presses wait here until a text-change notification arrives
//! and the reconciliation step decides how many of them it can attribute.

use super::KeyEvent;

/// Ordered queue of captured-but-not-yet-committed key events.
///
/// Entries accumulate between text-change notifications and are trimmed by
/// exactly the number the reconciliation step consumed. All operations are
/// total: reading or advancing past the end clamps to the queue length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingQueue {
    events: Vec<KeyEvent>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a captured event to the tail
    pub fn push(&mut self, event: KeyEvent) {
        self.events.push(event);
    }

    /// Read the first `n` events without consuming them.
    ///
    /// Returns fewer than `n` when the queue is shorter.
    pub fn take(&self, n: usize) -> &[KeyEvent] {
        &self.events[..n.min(self.events.len())]
    }

    /// Return the queue with the first `n` events removed
    pub fn advance(mut self, n: usize) -> Self {
        let n = n.min(self.events.len());
        self.events.drain(..n);
        self
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(key: &str, timestamp_ms: f64) -> KeyEvent {
        KeyEvent::new(key, timestamp_ms)
    }

    #[test]
    fn push_appends_in_order() {
        let mut queue = PendingQueue::new();
        queue.push(event("a", 10.0));
        queue.push(event("b", 20.0));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.take(2)[0].key, "a");
        assert_eq!(queue.take(2)[1].key, "b");
    }

    #[test]
    fn take_does_not_consume() {
        let mut queue = PendingQueue::new();
        queue.push(event("a", 10.0));

        let _ = queue.take(1);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn take_clamps_to_length() {
        let mut queue = PendingQueue::new();
        queue.push(event("a", 10.0));

        assert_eq!(queue.take(5).len(), 1);
        assert_eq!(PendingQueue::new().take(3).len(), 0);
    }

    #[test]
    fn advance_removes_from_front() {
        let mut queue = PendingQueue::new();
        queue.push(event("a", 10.0));
        queue.push(event("b", 20.0));
        queue.push(event("c", 30.0));

        let queue = queue.advance(2);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take(1)[0].key, "c");
    }

    #[test]
    fn advance_past_end_empties_queue() {
        let mut queue = PendingQueue::new();
        queue.push(event("a", 10.0));

        let queue = queue.advance(10);
        assert!(queue.is_empty());
    }

    #[test]
    fn advance_on_empty_queue_is_noop() {
        let queue = PendingQueue::new().advance(3);
        assert!(queue.is_empty());
    }
}
