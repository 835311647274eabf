//! Input event types

/// A classified user input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Knob turned clockwise by one detent
    Increase,
    /// Knob turned counter-clockwise by one detent
    Decrease,
    /// Single press and release
    Click,
    /// Two presses in quick succession
    DoubleClick,
    /// Button held past the long-press threshold
    LongPress,
}

impl Gesture {
    /// Check if this gesture came from the rotary encoder
    pub fn is_rotation(&self) -> bool {
        matches!(self, Gesture::Increase | Gesture::Decrease)
    }

    /// Signed step for rotary gestures, 0 for button gestures
    pub fn rotation_delta(&self) -> i32 {
        match self {
            Gesture::Increase => 1,
            Gesture::Decrease => -1,
            _ => 0,
        }
    }
}

/// A single debounce-tick reading of the button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSample {
    pub is_down: bool,
    pub timestamp_ms: u32,
}

impl ButtonSample {
    pub const fn new(is_down: bool, timestamp_ms: u32) -> Self {
        Self {
            is_down,
            timestamp_ms,
        }
    }
}

/// A recorded button state change
///
/// `time_since_previous_ms` is fixed when the entry is recorded and measured
/// against the entry that was newest at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub is_down: bool,
    pub timestamp_ms: u32,
    pub time_since_previous_ms: u32,
}
