//! RP2040-specific HAL for the wiper controller
//!
//! This crate provides RP2040 implementations of the shared `wiper-hal`
//! traits on top of `embassy-rp` and `embassy-time`:
//!
//! - GPIO input/output wrappers
//! - Millisecond clock backed by the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;

pub use clock::EmbassyClock;
pub use gpio::{RpInput, RpOutput};

// Re-export shared traits from wiper-hal for convenience
pub use wiper_hal::{Clock, InputPin, OutputPin};
