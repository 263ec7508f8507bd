//! Inter-task communication channels
//!
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use wiper_core::WiperEvent;

/// Channel capacity for controller events
const EVENT_CHANNEL_SIZE: usize = 16;

/// Controller events, consumed by the log task
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, WiperEvent, EVENT_CHANNEL_SIZE> =
    Channel::new();
