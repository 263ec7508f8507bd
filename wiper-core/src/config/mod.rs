//! Configuration types
//!
//! All timing parameters are compile-time constants by default. The
//! firmware may override them from its build-time configuration file,
//! but every configuration passes [`WiperConfig::validate`] before a
//! controller is built from it.

pub mod types;

pub use types::{
    ConfigError, WiperConfig, DEBOUNCE_WINDOW_MS, INTERMITTENT_DELAYS_MS, MAX_INTERVAL_STEPS,
    PULSE_WIDTH_MS, TICK_PERIOD_MS, TOGGLE_WINDOW_MS,
};
