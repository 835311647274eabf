//! User input: button gestures and rotary steps

pub mod events;
pub mod gesture;
pub mod rotary;

pub use events::{ButtonEvent, ButtonSample, Gesture};
pub use gesture::{GestureError, GestureRecognizer, DEBOUNCE_INTERVAL_MS, LONG_PRESS_MS, RELEASE_INTERVAL_MS};
pub use rotary::{RotaryTracker, ROTARY_QUEUE_DEPTH};
