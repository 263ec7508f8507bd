//! Wiper relay output driver
//!
//! Drives the relay that starts a wiper sweep. The controller asks for a
//! level every tick; the driver only touches the pin when the level
//! actually changes, so repeated requests are idempotent.
//!
//! ```ignore
//! let mut relay = RelayOutput::new(pin, Polarity::ActiveHigh);
//!
//! // Every control tick:
//! let out = controller.tick(switch.is_on(), now);
//! relay.set(out.relay);
//! ```

use wiper_hal::OutputPin;

use crate::Polarity;

/// Relay on a digital output
pub struct RelayOutput<P: OutputPin> {
    pin: P,
    polarity: Polarity,
    /// Logical level last written
    asserted: bool,
    /// Number of pin writes (changes only)
    switch_count: u32,
}

impl<P: OutputPin> RelayOutput<P> {
    /// Take the pin and open the relay immediately
    pub fn new(mut pin: P, polarity: Polarity) -> Self {
        pin.set_state(polarity.apply(false));
        Self {
            pin,
            polarity,
            asserted: false,
            switch_count: 0,
        }
    }

    /// Request a relay level (true = closed)
    ///
    /// Returns true if the pin was written.
    pub fn set(&mut self, asserted: bool) -> bool {
        if asserted == self.asserted {
            return false;
        }
        self.pin.set_state(self.polarity.apply(asserted));
        self.asserted = asserted;
        self.switch_count = self.switch_count.wrapping_add(1);
        true
    }

    /// Open the relay
    pub fn release(&mut self) -> bool {
        self.set(false)
    }

    /// Check if the relay is closed
    pub fn is_asserted(&self) -> bool {
        self.asserted
    }

    /// Electrical level currently driven on the pin
    pub fn pin_level(&self) -> bool {
        self.pin.is_set_high()
    }

    /// Number of level changes since creation
    pub fn switch_count(&self) -> u32 {
        self.switch_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockOutput {
        high: bool,
        writes: u32,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_new_opens_relay() {
        let pin = MockOutput {
            high: true,
            writes: 0,
        };
        let relay = RelayOutput::new(pin, Polarity::ActiveHigh);
        assert!(!relay.is_asserted());
        assert!(!relay.pin_level());
        assert_eq!(relay.pin.writes, 1);
    }

    #[test]
    fn test_redundant_writes_suppressed() {
        let mut relay = RelayOutput::new(MockOutput::default(), Polarity::ActiveHigh);

        assert!(relay.set(true));
        assert!(!relay.set(true));
        assert!(!relay.set(true));
        assert!(relay.pin_level());

        assert!(relay.release());
        assert!(!relay.release());
        assert!(!relay.pin_level());

        // Initial open + two changes
        assert_eq!(relay.pin.writes, 3);
        assert_eq!(relay.switch_count(), 2);
    }

    #[test]
    fn test_active_low_relay() {
        let mut relay = RelayOutput::new(MockOutput::default(), Polarity::ActiveLow);

        // Open relay drives the pin high
        assert!(relay.pin_level());

        relay.set(true);
        assert!(!relay.pin_level());
        assert!(relay.is_asserted());
    }
}
