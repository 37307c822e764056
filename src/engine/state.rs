//! Session state types
//!
//! The whole measurement session is one aggregate value, replaced wholesale
//! by every transition so that transitions stay atomic and trivially testable
//! without a running UI.

use super::PendingQueue;
use serde::{Deserialize, Serialize};

/// A captured key press with its timestamp in milliseconds.
///
/// Produced at capture time, queued until a text-change notification arrives,
/// then moved into a [`CommittedKeystroke`] on consumption.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// Normalized key name ("a", "\\n", "\\t", ...)
    pub key: String,
    /// Milliseconds since session start
    pub timestamp_ms: f64,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, timestamp_ms: f64) -> Self {
        Self {
            key: key.into(),
            timestamp_ms,
        }
    }
}

/// One character confirmed present in the text buffer, with the timing it
/// was attributed.
///
/// `baseline_ms` is the reference time the delay is measured against: the
/// previous committed keystroke's timestamp, the prior commit boundary for
/// the first character of a batch, or the keystroke's own timestamp when
/// nothing precedes it (or after a replace, which restarts the clock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommittedKeystroke {
    /// The character as stored in the log (normalized, e.g. "\\n")
    pub ch: String,
    /// When the originating key event fired
    pub timestamp_ms: f64,
    /// Reference time the delay is measured from
    pub baseline_ms: f64,
}

impl CommittedKeystroke {
    pub fn new(ch: impl Into<String>, timestamp_ms: f64, baseline_ms: f64) -> Self {
        Self {
            ch: ch.into(),
            timestamp_ms,
            baseline_ms,
        }
    }

    /// Delay relative to the baseline
    pub fn delay_ms(&self) -> f64 {
        self.timestamp_ms - self.baseline_ms
    }
}

/// The full session aggregate: committed log, pending queue, commit boundary
/// and current text.
///
/// Invariant restored by every reconcile step: `log.len()` equals the char
/// count of `text`. Paste is the one documented exception — unattributed
/// characters update the text but never the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Committed keystrokes, one per character of `text`
    pub log: Vec<CommittedKeystroke>,
    /// Captured key events awaiting correlation
    pub pending: PendingQueue,
    /// Timestamp of the most recently committed keystroke
    pub last_commit_ms: Option<f64>,
    /// Current committed buffer content
    pub text: String,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of characters (not bytes) in the committed text
    pub fn text_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Queue a captured key press
    pub fn push_event(&mut self, event: KeyEvent) {
        self.pending.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keystroke_delay_is_timestamp_minus_baseline() {
        let k = CommittedKeystroke::new("a", 150.0, 100.0);
        assert_eq!(k.delay_ms(), 50.0);
    }

    #[test]
    fn initial_state_is_empty() {
        let state = SessionState::new();
        assert!(state.log.is_empty());
        assert!(state.pending.is_empty());
        assert_eq!(state.last_commit_ms, None);
        assert_eq!(state.text, "");
    }

    #[test]
    fn text_chars_counts_chars_not_bytes() {
        let state = SessionState {
            text: "héllo".to_string(),
            ..SessionState::new()
        };
        assert_eq!(state.text_chars(), 5);
        assert_eq!(state.text.len(), 6);
    }

    #[test]
    fn push_event_lands_in_pending_queue() {
        let mut state = SessionState::new();
        state.push_event(KeyEvent::new("a", 100.0));
        assert_eq!(state.pending.len(), 1);
    }
}
