//! Millisecond clock backed by `embassy-time`

use embassy_time::Instant;

/// Uptime clock truncated to the 32-bit wrapping counter
///
/// `embassy-time` keeps a 64-bit tick count; truncating its millisecond
/// value gives exactly the wrap-at-`u32::MAX` behavior the core expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl EmbassyClock {
    pub const fn new() -> Self {
        Self
    }
}

impl wiper_hal::Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
