//! UI state machine
//!
//! Display mode, list cursor, status lines and dirty regions. Mutated only
//! by the cooperative context: gestures from the gesture task, fetched
//! status from the display task, link and clock text from the network task.

pub mod machine;
pub mod status_bar;
pub mod ui;

pub use machine::DisplayMode;
pub use status_bar::{format_clock, BottomStatus, LinkState, SignalStrength, TopStatus};
pub use ui::{DirtyRegions, ScreenPower, Selection, UiState, DEFAULT_SCREEN_OFF_MS, VISIBLE_ROWS};
