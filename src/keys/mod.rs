//! Key capture: naming, classification and the session timebase

pub mod classify;
mod clock;
mod name;

pub use classify::{classify, KeyClass};
pub use clock::SessionClock;
pub use name::key_name;
