//! Configuration type definitions

use crate::interval::IntervalTable;

/// Minimum time a raw switch reading must hold before it is trusted (ms)
pub const DEBOUNCE_WINDOW_MS: u32 = 50;

/// Maximum OFF duration for an ON-OFF-ON cycle to count as a toggle (ms)
pub const TOGGLE_WINDOW_MS: u32 = 2000;

/// Intermittent delays for toggle counts 0..=3 (ms)
pub const INTERMITTENT_DELAYS_MS: [u32; 4] = [10_000, 7_500, 5_000, 2_500];

/// Time the relay stays closed to start one wiper sweep (ms)
pub const PULSE_WIDTH_MS: u32 = 500;

/// Control loop period (ms)
pub const TICK_PERIOD_MS: u32 = 10;

/// Maximum intermittent steps before continuous mode
pub const MAX_INTERVAL_STEPS: usize = 8;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick period is zero
    ZeroTickPeriod,
    /// Debounce window cannot be observed at the tick rate
    DebounceShorterThanTick,
    /// Toggle window does not exceed the debounce window, so no toggle
    /// could ever be detected
    ToggleWindowTooShort,
    /// Pulse would end before the next tick could observe it
    PulseShorterThanTick,
    /// No intermittent steps configured
    EmptyIntervalTable,
    /// Intermittent delay at this step does not exceed the pulse width
    IntervalNotAbovePulse { step: u8 },
    /// Delay at this step is not shorter than the previous step
    IntervalsNotDescending { step: u8 },
    /// More intermittent steps than the table can hold
    TooManyIntervals,
}

/// Controller timing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WiperConfig {
    /// Debounce window (ms)
    pub debounce_ms: u32,
    /// Toggle window (ms)
    pub toggle_window_ms: u32,
    /// Relay pulse width (ms)
    pub pulse_width_ms: u32,
    /// Control tick period (ms)
    pub tick_ms: u32,
    /// Intermittent delays, slowest first
    pub intervals: IntervalTable,
}

impl Default for WiperConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_WINDOW_MS,
            toggle_window_ms: TOGGLE_WINDOW_MS,
            pulse_width_ms: PULSE_WIDTH_MS,
            tick_ms: TICK_PERIOD_MS,
            intervals: IntervalTable::default(),
        }
    }
}

impl WiperConfig {
    /// Check that every duration is coarse enough for the tick period
    /// and that the interval table is strictly descending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.debounce_ms < self.tick_ms {
            return Err(ConfigError::DebounceShorterThanTick);
        }
        if self.toggle_window_ms <= self.debounce_ms {
            return Err(ConfigError::ToggleWindowTooShort);
        }
        if self.pulse_width_ms < self.tick_ms {
            return Err(ConfigError::PulseShorterThanTick);
        }
        if self.intervals.is_empty() {
            return Err(ConfigError::EmptyIntervalTable);
        }

        let mut previous: Option<u32> = None;
        for (step, &delay) in self.intervals.delays_ms().iter().enumerate() {
            let step = step as u8;
            if delay <= self.pulse_width_ms {
                return Err(ConfigError::IntervalNotAbovePulse { step });
            }
            if previous.is_some_and(|prev| delay >= prev) {
                return Err(ConfigError::IntervalsNotDescending { step });
            }
            previous = Some(delay);
        }

        Ok(())
    }
}
