//! Wiper state machine
//!
//! The switch position and the pulse sub-state are folded into one
//! explicit state. The relay level is a function of the state alone, so
//! leaving ON always opens the relay no matter where the pulse was.

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiperState {
    /// Switch off; relay open. Quiescent state.
    Off,
    /// Switch on, waiting for the next pulse; relay open
    Idle,
    /// Switch on, pulse in progress; relay closed
    Pulsing,
}

/// Events that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Debounced OFF->ON transition
    SwitchedOn,
    /// Debounced ON->OFF transition
    SwitchedOff,
    /// Interval elapsed or an immediate wipe was requested
    WipeDue,
    /// Pulse width elapsed
    PulseExpired,
}

impl WiperState {
    /// Initial state for a debounced switch position at power-up
    pub fn from_switch(on: bool) -> Self {
        if on {
            WiperState::Idle
        } else {
            WiperState::Off
        }
    }

    /// Check if the relay should be closed
    pub fn relay_asserted(&self) -> bool {
        matches!(self, WiperState::Pulsing)
    }

    /// Check if the switch is in the ON position
    pub fn switch_on(&self) -> bool {
        matches!(self, WiperState::Idle | WiperState::Pulsing)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use WiperState::*;

        match (self, event) {
            // Off transitions
            (Off, SwitchedOn) => Idle,

            // Idle transitions
            (Idle, WipeDue) => Pulsing,
            (Idle, SwitchedOff) => Off,

            // Pulsing transitions
            (Pulsing, WipeDue) => Pulsing, // Re-trigger (continuous mode)
            (Pulsing, PulseExpired) => Idle,
            (Pulsing, SwitchedOff) => Off,

            // Default: stay in current state
            _ => self,
        }
    }
}
