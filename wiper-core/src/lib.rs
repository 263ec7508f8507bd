//! Board-agnostic core logic for the intermittent wiper controller
//!
//! This crate contains the whole decision/timing state machine between
//! the dashboard switch and the wiper relay:
//!
//! - Wrapping millisecond timestamps
//! - Debounce filter for the raw switch reading
//! - Toggle tracker inferring the requested wipe frequency
//! - Interval selection from the toggle count
//! - Pulse timing for the relay output
//! - Explicit wiper state machine and the per-tick controller
//! - Configuration types and validation
//!
//! Nothing here touches hardware. The firmware samples the switch,
//! calls [`controller::WiperController::tick`] once per control period
//! and writes the returned relay level.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod debounce;
pub mod interval;
pub mod pulse;
pub mod state;
pub mod time;
pub mod toggle;

pub use config::{ConfigError, WiperConfig};
pub use controller::{TickOutput, WiperController, WiperEvent};
pub use state::{Event, WiperState};
pub use time::Timestamp;
