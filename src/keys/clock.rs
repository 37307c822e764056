//! Session timebase
//!
//! Timestamps handed to the engine are milliseconds since session start as
//! floating point. They are opaque ordering values: the engine never
//! validates them, it only subtracts them.

use std::time::Instant;

/// Monotonic millisecond clock anchored at session start
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds elapsed since the clock was started
    pub fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    /// Seconds elapsed since the clock was started
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
