//! Button gesture recognition
//!
//! The recognizer is fed one [`ButtonSample`] per debounce tick. A history
//! entry is recorded only when the sampled state differs from the newest
//! entry, so the history holds the last few state changes, newest first.
//!
//! After recording, the history is matched in priority order:
//!
//! 1. Double click: `[up, down, up, down]` newest first, every internal gap
//!    below [`RELEASE_INTERVAL_MS`]
//! 2. Click: `[up, down, ..]` with a short press, once the button has stayed
//!    released for longer than [`RELEASE_INTERVAL_MS`]
//! 3. Long press: newest entry is a press older than [`LONG_PRESS_MS`]
//!
//! A match clears the history. A click is therefore only reported on the
//! first tick after the release grace period, which is what separates it
//! from the first half of a double click.

use heapless::Deque;
use statusknob_hal::{ButtonPin, MonotonicClock};

use super::events::{ButtonEvent, ButtonSample, Gesture};
use crate::timing::elapsed_ms;

/// Maximum gap between state changes that still counts as one gesture
pub const RELEASE_INTERVAL_MS: u32 = 350;

/// Hold time after which a press becomes a long press
pub const LONG_PRESS_MS: u32 = 1500;

/// Sampling cadence the thresholds are tuned for
pub const DEBOUNCE_INTERVAL_MS: u32 = 20;

/// Number of state changes kept for matching
pub const HISTORY_CAPACITY: usize = 4;

/// Recognizer internal-consistency errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureError {
    /// History exceeded its capacity
    HistoryOverflow,
}

impl core::fmt::Display for GestureError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GestureError::HistoryOverflow => write!(f, "button history overflow"),
        }
    }
}

/// Button gesture state machine
#[derive(Debug, Default)]
pub struct GestureRecognizer {
    /// State changes, newest first
    history: Deque<ButtonEvent, HISTORY_CAPACITY>,
    /// A long press fired and the button has not been released yet
    awaiting_release: bool,
}

impl GestureRecognizer {
    pub const fn new() -> Self {
        Self {
            history: Deque::new(),
            awaiting_release: false,
        }
    }

    /// Sample the button and clock, then run one recognition step
    pub fn poll<B, C>(&mut self, button: &mut B, clock: &C) -> Result<Option<Gesture>, GestureError>
    where
        B: ButtonPin + ?Sized,
        C: MonotonicClock + ?Sized,
    {
        let sample = ButtonSample::new(button.is_pressed(), clock.now_ms());
        self.sample(sample)
    }

    /// Run one recognition step for a debounce-tick sample
    ///
    /// At most one gesture is reported per call.
    pub fn sample(&mut self, sample: ButtonSample) -> Result<Option<Gesture>, GestureError> {
        if self.awaiting_release {
            if sample.is_down {
                return Ok(None);
            }
            // Long press is over; start fresh from the release
            self.awaiting_release = false;
            self.history.clear();
            self.record(sample)?;
            return Ok(None);
        }

        let changed = self
            .history
            .front()
            .map_or(true, |newest| newest.is_down != sample.is_down);
        if changed {
            self.record(sample)?;
        }

        let gesture = self.classify(sample.timestamp_ms);
        if let Some(gesture) = gesture {
            self.history.clear();
            if gesture == Gesture::LongPress {
                self.awaiting_release = true;
            }
        }
        Ok(gesture)
    }

    /// Drop all recorded state changes
    pub fn clear(&mut self) {
        self.history.clear();
        self.awaiting_release = false;
    }

    /// Recorded state changes, newest first
    pub fn history(&self) -> impl Iterator<Item = &ButtonEvent> {
        self.history.iter()
    }

    /// Number of recorded state changes
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn record(&mut self, sample: ButtonSample) -> Result<(), GestureError> {
        let time_since_previous_ms = self
            .history
            .front()
            .map_or(0, |newest| elapsed_ms(sample.timestamp_ms, newest.timestamp_ms));

        if self.history.is_full() {
            self.history.pop_back();
        }

        self.history
            .push_front(ButtonEvent {
                is_down: sample.is_down,
                timestamp_ms: sample.timestamp_ms,
                time_since_previous_ms,
            })
            .map_err(|_| GestureError::HistoryOverflow)
    }

    fn entry(&self, index: usize) -> Option<&ButtonEvent> {
        self.history.iter().nth(index)
    }

    fn classify(&self, now_ms: u32) -> Option<Gesture> {
        let quick = |e: &ButtonEvent| e.time_since_previous_ms < RELEASE_INTERVAL_MS;

        if let (Some(e0), Some(e1), Some(e2), Some(e3)) =
            (self.entry(0), self.entry(1), self.entry(2), self.entry(3))
        {
            if !e0.is_down
                && e1.is_down
                && !e2.is_down
                && e3.is_down
                && quick(e0)
                && quick(e1)
                && quick(e2)
            {
                return Some(Gesture::DoubleClick);
            }
        }

        if let (Some(e0), Some(e1)) = (self.entry(0), self.entry(1)) {
            if !e0.is_down
                && e1.is_down
                && quick(e0)
                && elapsed_ms(now_ms, e0.timestamp_ms) > RELEASE_INTERVAL_MS
            {
                return Some(Gesture::Click);
            }
        }

        match self.entry(0) {
            Some(e0) if e0.is_down && elapsed_ms(now_ms, e0.timestamp_ms) > LONG_PRESS_MS => {
                Some(Gesture::LongPress)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a constant level at debounce cadence over `[from, to)`
    fn hold(rec: &mut GestureRecognizer, from: u32, to: u32, is_down: bool) -> Vec<(u32, Gesture)> {
        let mut out = Vec::new();
        let mut t = from;
        while t < to {
            if let Some(g) = rec.sample(ButtonSample::new(is_down, t)).unwrap() {
                out.push((t, g));
            }
            t += DEBOUNCE_INTERVAL_MS;
        }
        out
    }

    #[test]
    fn test_single_click_after_grace_period() {
        let mut rec = GestureRecognizer::new();
        assert!(hold(&mut rec, 0, 100, true).is_empty());
        let out = hold(&mut rec, 100, 1000, false);
        // Released at 100; first tick strictly past 100 + 350 is 460
        assert_eq!(out, [(460, Gesture::Click)]);
        assert_eq!(rec.history_len(), 1);
    }

    #[test]
    fn test_double_click_suppresses_single() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 100, true);
        out.extend(hold(&mut rec, 100, 200, false));
        out.extend(hold(&mut rec, 200, 300, true));
        out.extend(hold(&mut rec, 300, 2000, false));
        assert_eq!(out, [(300, Gesture::DoubleClick)]);
    }

    #[test]
    fn test_click_after_double_click_is_independent() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 100, true);
        out.extend(hold(&mut rec, 100, 200, false));
        out.extend(hold(&mut rec, 200, 300, true));
        out.extend(hold(&mut rec, 300, 1000, false));
        out.extend(hold(&mut rec, 1000, 1100, true));
        out.extend(hold(&mut rec, 1100, 2000, false));
        assert_eq!(out, [(300, Gesture::DoubleClick), (1460, Gesture::Click)]);
    }

    #[test]
    fn test_long_press_fires_once_without_click() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 5000, true);
        out.extend(hold(&mut rec, 5000, 7000, false));
        assert_eq!(out, [(1520, Gesture::LongPress)]);
    }

    #[test]
    fn test_click_after_long_press_release() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 2000, true);
        out.extend(hold(&mut rec, 2000, 2500, false));
        out.extend(hold(&mut rec, 2500, 2600, true));
        out.extend(hold(&mut rec, 2600, 3500, false));
        assert_eq!(out, [(1520, Gesture::LongPress), (2960, Gesture::Click)]);
    }

    #[test]
    fn test_slow_release_is_not_a_click() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 400, true);
        out.extend(hold(&mut rec, 400, 2000, false));
        assert!(out.is_empty());
    }

    #[test]
    fn test_slow_second_press_is_two_clicks() {
        let mut rec = GestureRecognizer::new();
        let mut out = hold(&mut rec, 0, 100, true);
        out.extend(hold(&mut rec, 100, 600, false));
        out.extend(hold(&mut rec, 600, 700, true));
        out.extend(hold(&mut rec, 700, 1200, false));
        assert_eq!(out, [(460, Gesture::Click), (1060, Gesture::Click)]);
    }

    #[test]
    fn test_history_records_only_changes() {
        let mut rec = GestureRecognizer::new();
        hold(&mut rec, 0, 100, false);
        assert_eq!(rec.history_len(), 1);
        hold(&mut rec, 100, 200, true);
        assert_eq!(rec.history_len(), 2);

        let newest = rec.history().next().unwrap();
        assert!(newest.is_down);
        assert_eq!(newest.timestamp_ms, 100);
        assert_eq!(newest.time_since_previous_ms, 100);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut rec = GestureRecognizer::new();
        // Press long enough that nothing matches, release slowly
        for i in 0..10u32 {
            let base = i * 800;
            hold(&mut rec, base, base + 400, true);
            hold(&mut rec, base + 400, base + 420, false);
            assert!(rec.history_len() <= HISTORY_CAPACITY);
        }
    }

    #[test]
    fn test_poll_reads_button_and_clock() {
        struct Pin(bool);
        impl ButtonPin for Pin {
            fn is_pressed(&mut self) -> bool {
                self.0
            }
        }
        struct Clock(u32);
        impl MonotonicClock for Clock {
            fn now_ms(&self) -> u32 {
                self.0
            }
        }

        let mut rec = GestureRecognizer::new();
        let mut pin = Pin(true);
        assert_eq!(rec.poll(&mut pin, &Clock(0)), Ok(None));
        assert_eq!(rec.poll(&mut pin, &Clock(1600)), Ok(Some(Gesture::LongPress)));
    }

    #[test]
    fn test_clock_wrap_during_press() {
        let mut rec = GestureRecognizer::new();
        let start = u32::MAX - 50;
        assert_eq!(rec.sample(ButtonSample::new(true, start)), Ok(None));
        assert_eq!(
            rec.sample(ButtonSample::new(false, start.wrapping_add(100))),
            Ok(None)
        );
        assert_eq!(
            rec.sample(ButtonSample::new(false, start.wrapping_add(460))),
            Ok(Some(Gesture::Click))
        );
    }
}
