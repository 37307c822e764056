//! Reconciliation engine: pending queue, session state, transitions and stats

mod queue;
mod reconcile;
mod state;
pub mod stats;

pub use queue::PendingQueue;
pub use reconcile::reconcile;
pub use state::{CommittedKeystroke, KeyEvent, SessionState};
