//! Display mode state machine
//!
//! Which screen is shown is a pure function of the current mode and a
//! gesture. Side effects (cursor movement, expiry edits, committing a
//! selection) are applied by [`super::UiState`].

use crate::input::Gesture;

/// Screens the appliance can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Status preset list
    #[default]
    Main,
    /// Network details
    WifiInfo,
    /// Editing the expiry of the highlighted preset
    ExpirySelect,
}

impl DisplayMode {
    /// Check if rotation moves the list cursor in this mode
    pub fn scrolls_list(&self) -> bool {
        matches!(self, DisplayMode::Main)
    }

    /// Check if a click in this mode commits the highlighted preset
    pub fn commits_on_click(&self) -> bool {
        matches!(self, DisplayMode::Main | DisplayMode::ExpirySelect)
    }

    /// Process a gesture and return the next mode
    pub fn transition(self, gesture: Gesture) -> Self {
        use DisplayMode::*;
        use Gesture::*;

        match (self, gesture) {
            (Main, LongPress) => WifiInfo,
            (WifiInfo, LongPress) => Main,

            (Main, DoubleClick) => ExpirySelect,

            (Main, Click) => Main,
            (ExpirySelect, Click) => Main,

            // Default: stay in current mode
            _ => self,
        }
    }
}
