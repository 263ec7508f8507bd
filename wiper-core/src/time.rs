//! Millisecond timestamps
//!
//! The monotonic clock is a free-running 32-bit millisecond counter that
//! wraps to zero after `u32::MAX` (about 49.7 days of uptime). Durations
//! are always computed with wrapping subtraction, which yields the correct
//! value across a single wraparound. No other arithmetic on timestamps is
//! performed anywhere in the core.

/// A reading of the monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp(u32);

impl Timestamp {
    /// Create a timestamp from a raw millisecond counter value
    pub const fn from_millis(ms: u32) -> Self {
        Self(ms)
    }

    /// Raw millisecond counter value
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`
    ///
    /// Valid as long as less than 2^32 ms separate the two readings.
    pub const fn elapsed_since(self, earlier: Timestamp) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Check whether strictly more than `duration_ms` has passed since `earlier`
    pub const fn is_after(self, earlier: Timestamp, duration_ms: u32) -> bool {
        self.elapsed_since(earlier) > duration_ms
    }

    /// Timestamp `delta_ms` later, wrapping like the hardware counter
    pub const fn wrapping_add(self, delta_ms: u32) -> Self {
        Self(self.0.wrapping_add(delta_ms))
    }
}
