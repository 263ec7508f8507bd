//! Intermittent Wiper Controller Firmware
//!
//! Main firmware binary for RP2040-based wiper controllers. Reads the
//! dashboard wiper switch, infers the requested wipe frequency from how
//! quickly it is toggled and pulses the wiper relay accordingly.
//!
//! Wiring: switch on GPIO4, relay driver on GPIO3.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use wiper_core::{Timestamp, WiperController};
use wiper_drivers::{Polarity, RelayOutput, SwitchInput};
use wiper_hal_rp2040::{Clock, EmbassyClock, RpInput, RpOutput};

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Wiper controller firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let relay_polarity = Polarity::from_active_high(config::RELAY_ACTIVE_HIGH);
    let switch_polarity = Polarity::from_active_high(config::SWITCH_ACTIVE_HIGH);

    // Relay first, held open, before anything else runs
    let relay_pin = Output::new(p.PIN_3, Level::from(relay_polarity.apply(false)));
    let relay = RelayOutput::new(RpOutput::new(relay_pin), relay_polarity);

    // Bias the input toward the OFF level
    let pull = match switch_polarity {
        Polarity::ActiveHigh => Pull::Down,
        Polarity::ActiveLow => Pull::Up,
    };
    let switch = SwitchInput::new(RpInput::new(Input::new(p.PIN_4, pull)), switch_polarity);
    info!("GPIO initialized (switch: {}, relay: {})", switch_polarity, relay_polarity);

    // One authoritative sample seeds the debounced state
    let clock = EmbassyClock::new();
    let initial_raw = switch.is_on();
    let now = Timestamp::from_millis(clock.now_ms());

    let controller = match config::build()
        .and_then(|config| WiperController::new(config, initial_raw, now))
    {
        Ok(controller) => controller,
        Err(e) => {
            error!("Invalid wiper configuration: {:?}, using defaults", e);
            WiperController::with_defaults(initial_raw, now)
        }
    };
    config::log(controller.config());
    info!(
        "Switch {} at power-up, interval {}",
        if initial_raw { "ON" } else { "OFF" },
        controller.interval()
    );

    // Spawn tasks
    spawner.spawn(tasks::event_log_task()).unwrap();
    spawner
        .spawn(tasks::wiper_task(switch, relay, clock, controller))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
