//! Toggle tracking
//!
//! Flicking the switch OFF and back ON quickly is the only way the driver
//! selects a wipe frequency. Each ON that follows an OFF shorter than the
//! toggle window steps one interval faster; a longer OFF starts over at
//! the slowest interval. Every ON requests an immediate wipe.
//!
//! Power-up counts as the last OFF, so an ON within the toggle window of
//! boot already steps one interval faster.

use crate::time::Timestamp;

/// How an ON transition was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToggleKind {
    /// Switch was off longer than the toggle window
    Fresh,
    /// Switch came back within the toggle window
    Continued,
}

/// Tracks rapid ON-OFF-ON cycles
#[derive(Debug, Clone)]
pub struct ToggleTracker {
    /// Maximum OFF duration that still counts as a toggle (ms)
    window_ms: u32,
    /// Qualifying cycles since the last fresh activation
    count: u32,
    /// Time of the last committed ON->OFF transition, or power-up
    last_off: Timestamp,
    /// Pending immediate wipe
    force_wipe: bool,
}

impl ToggleTracker {
    /// Create a tracker; `now` is the power-up time
    pub fn new(window_ms: u32, now: Timestamp) -> Self {
        Self {
            window_ms,
            count: 0,
            last_off: now,
            force_wipe: false,
        }
    }

    /// Handle a committed OFF->ON transition
    pub fn on_switched_on(&mut self, now: Timestamp) -> ToggleKind {
        self.force_wipe = true;

        if now.elapsed_since(self.last_off) < self.window_ms {
            self.count = self.count.saturating_add(1);
            ToggleKind::Continued
        } else {
            self.count = 0;
            ToggleKind::Fresh
        }
    }

    /// Handle a committed ON->OFF transition
    pub fn on_switched_off(&mut self, now: Timestamp) {
        self.last_off = now;
    }

    /// Consume the pending immediate-wipe request
    pub fn take_force_wipe(&mut self) -> bool {
        core::mem::take(&mut self.force_wipe)
    }

    /// Check for a pending immediate-wipe request without consuming it
    pub fn force_wipe_pending(&self) -> bool {
        self.force_wipe
    }

    /// Current toggle count
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW: u32 = 2000;

    fn ts(ms: u32) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_on_within_window_of_boot_is_toggle() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(0));
        assert_eq!(tracker.on_switched_on(ts(500)), ToggleKind::Continued);
        assert_eq!(tracker.count(), 1);
        assert!(tracker.force_wipe_pending());
    }

    #[test]
    fn test_on_long_after_boot_is_fresh() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(1_000));
        assert_eq!(tracker.on_switched_on(ts(3_000)), ToggleKind::Fresh);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_quick_cycle_increments() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(0));
        assert_eq!(tracker.on_switched_on(ts(5_000)), ToggleKind::Fresh);
        tracker.on_switched_off(ts(5_300));
        assert_eq!(tracker.on_switched_on(ts(5_600)), ToggleKind::Continued);
        assert_eq!(tracker.count(), 1);

        tracker.on_switched_off(ts(5_900));
        tracker.on_switched_on(ts(7_899));
        assert_eq!(tracker.count(), 2);
    }

    #[test]
    fn test_slow_cycle_resets() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(0));
        tracker.on_switched_on(ts(5_000));
        tracker.on_switched_off(ts(5_100));
        tracker.on_switched_on(ts(5_200));
        assert_eq!(tracker.count(), 1);

        tracker.on_switched_off(ts(6_000));
        // Exactly the window is not a toggle
        assert_eq!(tracker.on_switched_on(ts(8_000)), ToggleKind::Fresh);
        assert_eq!(tracker.count(), 0);
    }

    #[test]
    fn test_force_wipe_consumed_once() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(0));
        assert!(!tracker.take_force_wipe());

        tracker.on_switched_on(ts(0));
        assert!(tracker.take_force_wipe());
        assert!(!tracker.take_force_wipe());
    }

    #[test]
    fn test_toggle_across_clock_wrap() {
        let mut tracker = ToggleTracker::new(WINDOW, ts(0));
        tracker.on_switched_off(ts(u32::MAX - 100));
        assert_eq!(tracker.on_switched_on(ts(400)), ToggleKind::Continued);
    }

    proptest! {
        #[test]
        fn prop_long_off_resets(prior in 0u32..16, off_at in any::<u32>(), gap in WINDOW..u32::MAX / 2) {
            let mut tracker = ToggleTracker::new(WINDOW, ts(0));
            tracker.count = prior;
            tracker.on_switched_off(ts(off_at));
            tracker.on_switched_on(ts(off_at).wrapping_add(gap));
            prop_assert_eq!(tracker.count(), 0);
        }

        #[test]
        fn prop_short_off_increments_by_one(prior in 0u32..16, off_at in any::<u32>(), gap in 0u32..WINDOW) {
            let mut tracker = ToggleTracker::new(WINDOW, ts(0));
            tracker.count = prior;
            tracker.on_switched_off(ts(off_at));
            tracker.on_switched_on(ts(off_at).wrapping_add(gap));
            prop_assert_eq!(tracker.count(), prior + 1);
        }
    }
}
