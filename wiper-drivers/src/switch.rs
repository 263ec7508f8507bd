//! Dashboard switch input
//!
//! Produces the raw (undebounced) ON/OFF reading once per tick.
//! Debouncing happens in `wiper-core`.

use wiper_hal::InputPin;

use crate::Polarity;

/// Dashboard switch on a digital input
pub struct SwitchInput<P: InputPin> {
    pin: P,
    polarity: Polarity,
}

impl<P: InputPin> SwitchInput<P> {
    pub fn new(pin: P, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    /// Raw switch reading (true = ON)
    pub fn is_on(&self) -> bool {
        self.polarity.apply(self.pin.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockInput<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for MockInput<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    #[test]
    fn test_active_high() {
        let level = Cell::new(false);
        let switch = SwitchInput::new(MockInput { level: &level }, Polarity::ActiveHigh);
        assert!(!switch.is_on());
        level.set(true);
        assert!(switch.is_on());
    }

    #[test]
    fn test_active_low() {
        let level = Cell::new(true);
        let switch = SwitchInput::new(MockInput { level: &level }, Polarity::ActiveLow);
        assert!(!switch.is_on());
        level.set(false);
        assert!(switch.is_on());
    }
}
