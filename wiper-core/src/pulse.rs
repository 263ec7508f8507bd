//! Relay pulse timing
//!
//! One wiper sweep is started by closing the relay for a fixed pulse
//! width. The motor's park switch finishes the sweep on its own, so the
//! controller only has to decide when a pulse starts and when it ends.

use crate::interval::WipeInterval;
use crate::time::Timestamp;

/// Pulse start/expiry timing
#[derive(Debug, Clone)]
pub struct PulseDriver {
    /// Relay closed time per sweep (ms)
    pulse_width_ms: u32,
    /// Start of the current or most recent pulse
    last_start: Timestamp,
}

impl PulseDriver {
    /// Create a driver whose interval timer starts at `now`
    pub fn new(pulse_width_ms: u32, now: Timestamp) -> Self {
        Self {
            pulse_width_ms,
            last_start: now,
        }
    }

    /// Check whether a new pulse is due
    ///
    /// Due when strictly more than the interval has passed since the last
    /// pulse started, or when an immediate wipe was requested. In
    /// continuous mode any elapsed tick makes a pulse due.
    pub fn should_start(&self, now: Timestamp, interval: WipeInterval, forced: bool) -> bool {
        forced || now.is_after(self.last_start, interval.delay_ms())
    }

    /// Record the start of a pulse
    pub fn start(&mut self, now: Timestamp) {
        self.last_start = now;
    }

    /// Check whether the pulse width has run out
    pub fn has_expired(&self, now: Timestamp) -> bool {
        now.is_after(self.last_start, self.pulse_width_ms)
    }

    /// Start of the current or most recent pulse
    pub fn last_start(&self) -> Timestamp {
        self.last_start
    }
}
