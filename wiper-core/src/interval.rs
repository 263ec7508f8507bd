//! Intermittent interval selection
//!
//! The toggle count selects a wipe spacing from a table ordered slowest
//! first. Counts at or past the end of the table select continuous mode.

use heapless::Vec;

use crate::config::{ConfigError, INTERMITTENT_DELAYS_MS, MAX_INTERVAL_STEPS};

/// Spacing between wipe pulses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WipeInterval {
    /// Wait this many milliseconds between pulse starts
    Intermittent(u32),
    /// Re-trigger as fast as the control tick allows
    Continuous,
}

impl WipeInterval {
    /// Delay in milliseconds; continuous mode is a zero delay
    pub fn delay_ms(&self) -> u32 {
        match self {
            WipeInterval::Intermittent(ms) => *ms,
            WipeInterval::Continuous => 0,
        }
    }

    /// Check if this is continuous mode
    pub fn is_continuous(&self) -> bool {
        matches!(self, WipeInterval::Continuous)
    }
}

/// Intermittent delays indexed by toggle count, slowest first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalTable {
    delays_ms: Vec<u32, MAX_INTERVAL_STEPS>,
}

impl Default for IntervalTable {
    fn default() -> Self {
        let mut delays_ms = Vec::new();
        for &delay in INTERMITTENT_DELAYS_MS.iter() {
            let _ = delays_ms.push(delay);
        }
        Self { delays_ms }
    }
}

impl IntervalTable {
    /// Build a table from a slice of delays
    ///
    /// Fails if the slice holds more than [`MAX_INTERVAL_STEPS`] entries.
    /// Ordering is checked by [`crate::config::WiperConfig::validate`].
    pub fn from_slice(delays_ms: &[u32]) -> Result<Self, ConfigError> {
        let delays_ms = Vec::from_slice(delays_ms).map_err(|_| ConfigError::TooManyIntervals)?;
        Ok(Self { delays_ms })
    }

    /// Select the interval for a toggle count
    pub fn select(&self, toggles: u32) -> WipeInterval {
        match self.delays_ms.get(toggles as usize) {
            Some(&ms) => WipeInterval::Intermittent(ms),
            None => WipeInterval::Continuous,
        }
    }

    /// Configured delays, slowest first
    pub fn delays_ms(&self) -> &[u32] {
        &self.delays_ms
    }

    /// Check if the table has no intermittent steps
    pub fn is_empty(&self) -> bool {
        self.delays_ms.is_empty()
    }
}
