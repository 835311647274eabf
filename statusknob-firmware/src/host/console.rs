//! Keyboard stand-in for the knob
//!
//! Reads lines from stdin on its own thread. Each character is one
//! command: `+` and `-` turn one detent, `c` clicks, `d` double-clicks and
//! `l` holds the button long enough for a long press.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};
use statusknob_core::input::{LONG_PRESS_MS, RELEASE_INTERVAL_MS};
use statusknob_hal::{ButtonPin, RotaryEncoder, RotaryListener};

use super::ManualEncoder;

/// Hold time of a tap, several debounce ticks
const TAP_MS: u32 = 100;

/// Release time between the presses of a double click
const GAP_MS: u32 = 100;

/// Button pressed from the console
#[derive(Debug, Clone, Default)]
pub struct ConsoleButton {
    down: Arc<AtomicBool>,
}

impl ButtonPin for ConsoleButton {
    fn is_pressed(&mut self) -> bool {
        self.down.load(Ordering::Relaxed)
    }
}

/// Encoder and button driven by typed commands
pub struct ConsoleKnob {
    encoder: ManualEncoder,
    button: ConsoleButton,
}

impl ConsoleKnob {
    pub fn new(listener: &'static dyn RotaryListener) -> Self {
        let mut encoder = ManualEncoder::new();
        encoder.set_listener(listener);
        Self {
            encoder,
            button: ConsoleButton::default(),
        }
    }

    /// Button handle for the gesture task
    pub fn button(&self) -> ConsoleButton {
        self.button.clone()
    }

    /// Run every command in `line`
    ///
    /// Button commands block until the gesture has been released long
    /// enough to stand on its own.
    pub fn apply(&mut self, line: &str) {
        for command in line.chars() {
            match command {
                '+' => self.encoder.turn(1),
                '-' => self.encoder.turn(-1),
                'c' => self.press(1, TAP_MS),
                'd' => self.press(2, TAP_MS),
                'l' => self.press(1, LONG_PRESS_MS + TAP_MS),
                c if c.is_whitespace() => {}
                other => warn!("unknown knob command {:?}", other),
            }
        }
    }

    fn press(&self, presses: u32, hold_ms: u32) {
        for n in 0..presses {
            if n > 0 {
                sleep_ms(GAP_MS);
            }
            self.button.down.store(true, Ordering::Relaxed);
            sleep_ms(hold_ms);
            self.button.down.store(false, Ordering::Relaxed);
        }
        sleep_ms(RELEASE_INTERVAL_MS + TAP_MS);
    }

    /// Read commands from stdin until it closes
    pub fn spawn(mut self) -> io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("console-knob".into())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    match line {
                        Ok(line) => self.apply(&line),
                        Err(e) => {
                            warn!("console input failed: {}", e);
                            break;
                        }
                    }
                }
                debug!("console input closed");
            })
    }
}

fn sleep_ms(ms: u32) {
    thread::sleep(Duration::from_millis(u64::from(ms)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusknob_core::input::{Gesture, RotaryTracker};

    fn tracker() -> &'static RotaryTracker {
        Box::leak(Box::new(RotaryTracker::new(0)))
    }

    #[test]
    fn test_turn_commands_reach_listener() {
        let rotary = tracker();
        let mut knob = ConsoleKnob::new(rotary);
        knob.apply("+ + -");

        assert_eq!(rotary.try_next(), Some(Gesture::Increase));
        assert_eq!(rotary.try_next(), Some(Gesture::Increase));
        assert_eq!(rotary.try_next(), Some(Gesture::Decrease));
        assert_eq!(rotary.try_next(), None);
    }

    #[test]
    fn test_unknown_commands_skipped() {
        let rotary = tracker();
        let mut knob = ConsoleKnob::new(rotary);
        let mut button = knob.button();
        knob.apply("x?");

        assert_eq!(rotary.try_next(), None);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_click_holds_button_then_releases() {
        let mut knob = ConsoleKnob::new(tracker());
        let mut button = knob.button();

        let handle = thread::spawn(move || knob.apply("c"));
        sleep_ms(TAP_MS / 2);
        assert!(button.is_pressed());
        handle.join().unwrap();
        assert!(!button.is_pressed());
    }
}
