//! Event log task
//!
//! Drains controller events and logs them over RTT. Keeps formatting
//! work out of the control loop.

use defmt::*;

use wiper_core::toggle::ToggleKind;
use wiper_core::WiperEvent;

use crate::channels::EVENT_CHANNEL;

#[embassy_executor::task]
pub async fn event_log_task() {
    info!("Event log task started");

    loop {
        match EVENT_CHANNEL.receive().await {
            WiperEvent::SwitchedOn { kind, toggles } => match kind {
                ToggleKind::Fresh => info!("Wipers on"),
                ToggleKind::Continued => info!("Toggle detected, count={}", toggles),
            },
            WiperEvent::SwitchedOff => info!("Wipers off"),
            WiperEvent::PulseStarted { forced, interval } => {
                debug!("Pulse started (forced={}, interval={})", forced, interval)
            }
            WiperEvent::PulseEnded => trace!("Pulse ended"),
        }
    }
}
