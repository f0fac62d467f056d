#![forbid(unsafe_code)]

//! Trial-relative monotonic timer.
//!
//! Every log entry and the final reaction time are expressed as milliseconds
//! since the widget started. Operations take `now: Instant` as a parameter
//! rather than reading the clock themselves, so tests can drive time
//! deterministically.

use web_time::Instant;

/// Monotonic, trial-relative clock.
#[derive(Debug, Clone, Copy)]
pub struct InteractionClock {
    start: Instant,
}

impl InteractionClock {
    /// Start the clock at `now`.
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self { start: now }
    }

    /// Milliseconds elapsed since the clock started.
    ///
    /// Saturates at zero if `now` predates the start (a host handing in a
    /// stale timestamp), so readings are monotonically non-negative.
    #[must_use]
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.start).as_millis() as u64
    }
}
