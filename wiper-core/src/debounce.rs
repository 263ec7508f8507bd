//! Switch debounce filter
//!
//! A hold filter: the raw reading must stay unchanged for the whole
//! debounce window before it replaces the stable position. Switch bounce
//! is short and bursty, so any change simply restarts the hold timer.

use crate::time::Timestamp;

/// Debounced position of the dashboard switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchPosition {
    Off,
    On,
}

impl SwitchPosition {
    /// Position corresponding to a raw reading
    pub fn from_raw(raw: bool) -> Self {
        if raw {
            SwitchPosition::On
        } else {
            SwitchPosition::Off
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, SwitchPosition::On)
    }
}

/// Hold-time debounce filter
#[derive(Debug, Clone)]
pub struct Debouncer {
    /// Required hold time (ms)
    window_ms: u32,
    /// Committed position
    stable: SwitchPosition,
    /// Raw reading seen on the previous update
    last_raw: bool,
    /// When the raw reading last changed
    last_change: Timestamp,
}

impl Debouncer {
    /// Create a filter seeded from one authoritative raw sample
    ///
    /// A switch already ON at power-up is honored immediately instead of
    /// waiting a full window.
    pub fn new(window_ms: u32, initial_raw: bool, now: Timestamp) -> Self {
        Self {
            window_ms,
            stable: SwitchPosition::from_raw(initial_raw),
            last_raw: initial_raw,
            last_change: now,
        }
    }

    /// Feed one raw sample
    ///
    /// Returns the new position when the stable state changes on this
    /// sample, `None` otherwise.
    pub fn update(&mut self, raw: bool, now: Timestamp) -> Option<SwitchPosition> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_change = now;
            return None;
        }

        let candidate = SwitchPosition::from_raw(raw);
        if candidate != self.stable && now.elapsed_since(self.last_change) >= self.window_ms {
            self.stable = candidate;
            return Some(candidate);
        }

        None
    }

    /// Current committed position
    pub fn stable(&self) -> SwitchPosition {
        self.stable
    }

    pub fn is_on(&self) -> bool {
        self.stable.is_on()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WINDOW: u32 = 50;
    const TICK: u32 = 10;

    fn ts(ms: u32) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    #[test]
    fn test_initial_sample_is_trusted() {
        let on = Debouncer::new(WINDOW, true, ts(0));
        assert_eq!(on.stable(), SwitchPosition::On);

        let off = Debouncer::new(WINDOW, false, ts(0));
        assert_eq!(off.stable(), SwitchPosition::Off);
    }

    #[test]
    fn test_commits_after_window() {
        let mut filter = Debouncer::new(WINDOW, false, ts(0));

        // Change observed at 100ms
        assert_eq!(filter.update(true, ts(100)), None);
        assert_eq!(filter.update(true, ts(140)), None);
        assert!(!filter.is_on());

        assert_eq!(filter.update(true, ts(150)), Some(SwitchPosition::On));
        assert!(filter.is_on());

        // No repeated commit while held
        assert_eq!(filter.update(true, ts(160)), None);
    }

    #[test]
    fn test_bounce_restarts_hold() {
        let mut filter = Debouncer::new(WINDOW, false, ts(0));

        filter.update(true, ts(100));
        filter.update(false, ts(130));
        filter.update(true, ts(140));
        assert_eq!(filter.update(true, ts(180)), None);
        assert_eq!(filter.update(true, ts(190)), Some(SwitchPosition::On));
    }

    #[test]
    fn test_release_commit() {
        let mut filter = Debouncer::new(WINDOW, true, ts(0));
        filter.update(false, ts(1_000));
        assert_eq!(filter.update(false, ts(1_050)), Some(SwitchPosition::Off));
    }

    #[test]
    fn test_commit_across_clock_wrap() {
        let seed = u32::MAX - 20;
        let mut filter = Debouncer::new(WINDOW, false, ts(seed));

        let change = ts(seed).wrapping_add(TICK);
        assert_eq!(filter.update(true, change), None);
        assert_eq!(filter.update(true, change.wrapping_add(40)), None);
        assert_eq!(
            filter.update(true, change.wrapping_add(50)),
            Some(SwitchPosition::On)
        );
    }

    proptest! {
        /// A held reading commits exactly one window after the hold begins
        #[test]
        fn prop_hold_commits_after_window(start in any::<u32>(), extra_ticks in 0u32..20) {
            let mut filter = Debouncer::new(WINDOW, false, ts(start));
            let hold_start = ts(start).wrapping_add(TICK);
            prop_assert_eq!(filter.update(true, hold_start), None);

            let mut committed_at = None;
            for i in 1..=(WINDOW / TICK + extra_ticks) {
                let now = hold_start.wrapping_add(i * TICK);
                if let Some(pos) = filter.update(true, now) {
                    prop_assert_eq!(pos, SwitchPosition::On);
                    committed_at = Some(now.elapsed_since(hold_start));
                    break;
                }
            }
            prop_assert_eq!(committed_at, Some(WINDOW));
        }

        /// Bursts shorter than the window never change the stable state
        #[test]
        fn prop_short_bounce_ignored(
            initial in any::<bool>(),
            bursts in proptest::collection::vec(1u32..(WINDOW / TICK), 1..10),
        ) {
            let mut filter = Debouncer::new(WINDOW, initial, ts(0));
            let mut now = ts(0);
            for len in bursts {
                for _ in 0..len {
                    now = now.wrapping_add(TICK);
                    prop_assert_eq!(filter.update(!initial, now), None);
                }
                now = now.wrapping_add(TICK);
                prop_assert_eq!(filter.update(initial, now), None);
            }
            prop_assert_eq!(filter.stable(), SwitchPosition::from_raw(initial));
        }
    }
}
