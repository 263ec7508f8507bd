//! Wiper Controller Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the controller
//! depends on. Chip-specific crates implement them so the decision logic
//! in `wiper-core` and the drivers in `wiper-drivers` stay portable and
//! host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  wiper-firmware (control + log tasks)   │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │   wiper-core    │   │  wiper-drivers  │
//! └─────────────────┘   └─────────────────┘
//!                                │
//!                                ▼
//! ┌─────────────────────────────────────────┐
//! │  wiper-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │  wiper-hal-rp2040 │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::Clock`] - Monotonic millisecond clock

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

pub use clock::Clock;
pub use gpio::{InputPin, OutputPin};
