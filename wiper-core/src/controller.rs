//! Per-tick wiper controller
//!
//! Owns every piece of controller state and runs one control cycle per
//! call to [`WiperController::tick`]:
//!
//! 1. Debounce the raw switch reading
//! 2. Classify committed ON/OFF transitions (toggle tracking)
//! 3. Select the intermittent interval from the toggle count
//! 4. Start a pulse if the interval elapsed or a wipe was forced
//! 5. End the pulse once the pulse width has elapsed
//!
//! The caller samples the switch once per tick, passes the current clock
//! reading and writes the returned relay level.

use crate::config::{ConfigError, WiperConfig};
use crate::debounce::{Debouncer, SwitchPosition};
use crate::interval::WipeInterval;
use crate::pulse::PulseDriver;
use crate::state::{Event, WiperState};
use crate::time::Timestamp;
use crate::toggle::{ToggleKind, ToggleTracker};

/// Upper bound on events reported by a single tick
pub const MAX_EVENTS_PER_TICK: usize = 4;

/// Events reported by one tick
pub type TickEvents = heapless::Vec<WiperEvent, MAX_EVENTS_PER_TICK>;

/// Notable things that happened during a tick
///
/// Reported for logging only; the relay level in [`TickOutput`] is the
/// sole control output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiperEvent {
    /// Switch committed ON
    SwitchedOn {
        kind: ToggleKind,
        toggles: u32,
    },
    /// Switch committed OFF; relay opened
    SwitchedOff,
    /// Relay closed for a new sweep
    PulseStarted {
        forced: bool,
        interval: WipeInterval,
    },
    /// Pulse width elapsed; relay opened
    PulseEnded,
}

/// Result of one control tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutput {
    /// Relay level to write (true = closed)
    pub relay: bool,
    /// Events that occurred during this tick
    pub events: TickEvents,
}

/// Intermittent wiper controller
#[derive(Debug, Clone)]
pub struct WiperController {
    config: WiperConfig,
    state: WiperState,
    debouncer: Debouncer,
    toggles: ToggleTracker,
    pulse: PulseDriver,
}

impl WiperController {
    /// Create a controller from a validated configuration
    ///
    /// `initial_raw` is one authoritative switch sample taken at power-up.
    /// A switch already ON starts in [`WiperState::Idle`] without a forced
    /// wipe; the first pulse follows one interval after `now`.
    pub fn new(config: WiperConfig, initial_raw: bool, now: Timestamp) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, initial_raw, now))
    }

    /// Create a controller with the built-in default timing
    pub fn with_defaults(initial_raw: bool, now: Timestamp) -> Self {
        Self::from_validated(WiperConfig::default(), initial_raw, now)
    }

    fn from_validated(config: WiperConfig, initial_raw: bool, now: Timestamp) -> Self {
        Self {
            state: WiperState::from_switch(initial_raw),
            debouncer: Debouncer::new(config.debounce_ms, initial_raw, now),
            toggles: ToggleTracker::new(config.toggle_window_ms, now),
            pulse: PulseDriver::new(config.pulse_width_ms, now),
            config,
        }
    }

    /// Run one control cycle
    pub fn tick(&mut self, raw: bool, now: Timestamp) -> TickOutput {
        let mut events = TickEvents::new();

        match self.debouncer.update(raw, now) {
            Some(SwitchPosition::On) => {
                let kind = self.toggles.on_switched_on(now);
                self.transition(Event::SwitchedOn);
                let _ = events.push(WiperEvent::SwitchedOn {
                    kind,
                    toggles: self.toggles.count(),
                });
            }
            Some(SwitchPosition::Off) => {
                self.toggles.on_switched_off(now);
                self.transition(Event::SwitchedOff);
                let _ = events.push(WiperEvent::SwitchedOff);
            }
            None => {}
        }

        if self.state.switch_on() {
            let interval = self.interval();
            let forced = self.toggles.force_wipe_pending();

            if self.pulse.should_start(now, interval, forced) {
                self.toggles.take_force_wipe();
                self.pulse.start(now);

                // Continuous mode re-triggers while already pulsing; only
                // report the rising edge
                if !self.state.relay_asserted() {
                    let _ = events.push(WiperEvent::PulseStarted { forced, interval });
                }
                self.transition(Event::WipeDue);
            }

            if self.state.relay_asserted() && self.pulse.has_expired(now) {
                self.transition(Event::PulseExpired);
                let _ = events.push(WiperEvent::PulseEnded);
            }
        }

        TickOutput {
            relay: self.state.relay_asserted(),
            events,
        }
    }

    /// Current state
    pub fn state(&self) -> WiperState {
        self.state
    }

    /// Current toggle count
    pub fn toggle_count(&self) -> u32 {
        self.toggles.count()
    }

    /// Interval selected by the current toggle count
    pub fn interval(&self) -> WipeInterval {
        self.config.intervals.select(self.toggles.count())
    }

    /// Check if the relay is currently closed
    pub fn relay_asserted(&self) -> bool {
        self.state.relay_asserted()
    }

    /// Debounced switch position
    pub fn switch_position(&self) -> SwitchPosition {
        self.debouncer.stable()
    }

    /// Active configuration
    pub fn config(&self) -> &WiperConfig {
        &self.config
    }

    fn transition(&mut self, event: Event) {
        self.state = self.state.transition(event);
    }
}
