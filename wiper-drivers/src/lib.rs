//! Hardware driver implementations
//!
//! Thin drivers between the `wiper-hal` pin traits and the controller:
//!
//! - Dashboard switch input with configurable polarity
//! - Wiper relay output with configurable polarity and redundant-write
//!   suppression

#![no_std]
#![deny(unsafe_code)]

pub mod relay;
pub mod switch;

pub use relay::RelayOutput;
pub use switch::SwitchInput;

/// Electrical level that means "active"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// High level is active
    #[default]
    ActiveHigh,
    /// Low level is active (inverted wiring or low-side driver)
    ActiveLow,
}

impl Polarity {
    /// Build from an `active_high` config flag
    pub fn from_active_high(active_high: bool) -> Self {
        if active_high {
            Polarity::ActiveHigh
        } else {
            Polarity::ActiveLow
        }
    }

    /// Convert between logical and electrical level (symmetric)
    pub fn apply(&self, level: bool) -> bool {
        match self {
            Polarity::ActiveHigh => level,
            Polarity::ActiveLow => !level,
        }
    }
}
