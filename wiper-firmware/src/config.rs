//! Build-time configuration
//!
//! `build.rs` validates `wiper.toml` and emits its values as constants.
//! They are assembled into a [`WiperConfig`] here; the controller checks
//! it again when it is built from it.

use defmt::*;

use wiper_core::config::{ConfigError, WiperConfig};
use wiper_core::interval::IntervalTable;

include!(concat!(env!("OUT_DIR"), "/wiper_config.rs"));

/// Assemble the controller configuration from the compiled-in constants
pub fn build() -> Result<WiperConfig, ConfigError> {
    Ok(WiperConfig {
        debounce_ms: DEBOUNCE_MS,
        toggle_window_ms: TOGGLE_WINDOW_MS,
        pulse_width_ms: PULSE_WIDTH_MS,
        tick_ms: TICK_MS,
        intervals: IntervalTable::from_slice(INTERVALS_MS)?,
    })
}

/// Log the active configuration
pub fn log(config: &WiperConfig) {
    info!(
        "Config: debounce={}ms toggle={}ms pulse={}ms tick={}ms intervals={}",
        config.debounce_ms,
        config.toggle_window_ms,
        config.pulse_width_ms,
        config.tick_ms,
        config.intervals.delays_ms()
    );
}
