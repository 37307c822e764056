//! Keylag - per-character typing delay measurement
//!
//! Reconstructs, from captured key presses and the text snapshots of a typing
//! surface, a log of how long each committed character took to type relative
//! to the previous one. The reconciliation engine correlates text-change
//! notifications with a queue of pending key events using length deltas
//! alone, so batch inserts, pastes, replaces and deletions all resolve to a
//! consistent keystroke log.

pub mod config;
pub mod engine;
pub mod keys;
pub mod report;
pub mod ui;

pub use config::Config;
