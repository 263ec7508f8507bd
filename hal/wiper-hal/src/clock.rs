//! Monotonic millisecond clock

/// Monotonic millisecond clock
///
/// The reading is a free-running 32-bit counter. It never decreases
/// except for a single wrap from `u32::MAX` back to 0, so consumers must
/// compute durations as `now.wrapping_sub(earlier)`.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (usually boot), modulo 2^32
    fn now_ms(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}
