//! Reconciliation between text snapshots and pending key events
//!
//! Text-change notifications are decoupled from key presses: one notification
//! may correspond to zero, one, or many captured events, paste produces a
//! change with no event at all, and a selection replace shrinks and grows the
//! buffer in a single notification. The engine classifies each notification
//! from the length delta and the queue alone, then rebuilds a consistent
//! session aggregate.

use super::{CommittedKeystroke, SessionState};

/// Apply one text-change notification to the session.
///
/// Total over its inputs: any text lengths, timestamps, and queue contents
/// produce a defined next state. The returned aggregate replaces the old one
/// wholesale.
///
/// Case order matters for the delta == 0 tie-break: a queued event is checked
/// before the sign of the delta, so a same-length notification with a pending
/// event is treated as a replace, never as a no-op.
pub fn reconcile(state: SessionState, new_text: &str) -> SessionState {
    let old_len = state.text_chars();
    let new_len = new_text.chars().count();

    if new_len > old_len && !state.pending.is_empty() {
        log::debug!("reconcile: growth by {} with queued events", new_len - old_len);
        commit_batch(state, new_text, new_len - old_len)
    } else if new_len <= old_len && !state.pending.is_empty() {
        log::debug!("reconcile: replace ({} -> {} chars)", old_len, new_len);
        replace_tail(state, new_text, old_len - new_len + 1)
    } else if new_len < old_len {
        log::debug!("reconcile: deletion of {} chars", old_len - new_len);
        truncate_tail(state, new_text, old_len - new_len)
    } else {
        // Growth (or no-op) with nothing queued: paste or programmatic
        // insertion. Unattributable, so the log stays untouched.
        log::debug!("reconcile: unattributed change ({} -> {} chars)", old_len, new_len);
        SessionState {
            text: new_text.to_owned(),
            ..state
        }
    }
}

/// Consume up to `delta` queued events, chaining baselines through the batch.
///
/// The first consumed event measures against the prior commit boundary (or
/// its own timestamp when the session has none); every subsequent event in
/// the batch measures against the event before it.
fn commit_batch(state: SessionState, new_text: &str, delta: usize) -> SessionState {
    let consumed = delta.min(state.pending.len());

    let (log, last_commit_ms) = state.pending.take(consumed).iter().fold(
        (state.log, state.last_commit_ms),
        |(mut log, baseline), event| {
            let baseline_ms = baseline.unwrap_or(event.timestamp_ms);
            log.push(CommittedKeystroke::new(
                event.key.clone(),
                event.timestamp_ms,
                baseline_ms,
            ));
            (log, Some(event.timestamp_ms))
        },
    );

    SessionState {
        log,
        pending: state.pending.advance(consumed),
        last_commit_ms,
        text: new_text.to_owned(),
    }
}

/// Selection replace: a range was deleted and one typed character inserted in
/// the same notification.
///
/// Drops `removed` keystrokes from the log tail, then commits one queued
/// event with its own timestamp as baseline — a replace restarts the delay
/// clock rather than carrying one over from the deleted range.
fn replace_tail(state: SessionState, new_text: &str, removed: usize) -> SessionState {
    let mut log = state.log;
    log.truncate(log.len().saturating_sub(removed));

    let event = state.pending.take(1)[0].clone();
    log.push(CommittedKeystroke::new(
        event.key,
        event.timestamp_ms,
        event.timestamp_ms,
    ));

    SessionState {
        log,
        pending: state.pending.advance(1),
        last_commit_ms: Some(event.timestamp_ms),
        text: new_text.to_owned(),
    }
}

/// Pure deletion: drop `removed` keystrokes from the log tail. The commit
/// boundary is left alone.
fn truncate_tail(state: SessionState, new_text: &str, removed: usize) -> SessionState {
    let mut log = state.log;
    log.truncate(log.len().saturating_sub(removed));

    SessionState {
        log,
        pending: state.pending,
        last_commit_ms: state.last_commit_ms,
        text: new_text.to_owned(),
    }
}
