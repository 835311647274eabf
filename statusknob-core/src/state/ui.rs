//! UI state: mode, list cursor, dirty regions and screen power
//!
//! The list is shown through a window of [`VISIBLE_ROWS`] rows starting at
//! `top_render_index`; `highlight_index` is the cursor row inside that
//! window. The window start is clamped to `len - VISIBLE_ROWS` and the
//! cursor to the last visible row, so the highlighted preset always exists.

use crate::input::Gesture;
use crate::status::{StatusList, StatusListItem};
use crate::timing::elapsed_ms;

use super::machine::DisplayMode;
use super::status_bar::{BottomStatus, TopStatus};

/// Rows of the preset list visible at once
pub const VISIBLE_ROWS: usize = 4;

/// Default idle time before the screen turns off
pub const DEFAULT_SCREEN_OFF_MS: u32 = 60 * 60 * 1000;

/// Screen regions that need a repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyRegions {
    pub top: bool,
    pub bottom: bool,
    pub body: bool,
}

impl DirtyRegions {
    pub const ALL: Self = Self {
        top: true,
        bottom: true,
        body: true,
    };

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.body
    }
}

/// Screen power transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenPower {
    Woke,
    Slept,
}

/// A preset committed with a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    /// Index into the status list
    pub index: usize,
}

/// UI state owned by the cooperative context
#[derive(Debug, Clone)]
pub struct UiState {
    mode: DisplayMode,
    top_render_index: usize,
    highlight_index: usize,
    dirty: DirtyRegions,
    top_status: TopStatus,
    bottom_status: BottomStatus,
    last_input_ms: u32,
    screen_on: bool,
    // Set by input while the screen is off; only this wakes it
    wake_pending: bool,
    screen_off_after_ms: u32,
}

impl UiState {
    /// Create the initial state; everything is dirty for the first paint
    pub fn new(screen_off_after_ms: u32, now_ms: u32) -> Self {
        Self {
            mode: DisplayMode::Main,
            top_render_index: 0,
            highlight_index: 0,
            dirty: DirtyRegions::ALL,
            top_status: TopStatus::default(),
            bottom_status: BottomStatus::default(),
            last_input_ms: now_ms,
            screen_on: true,
            wake_pending: false,
            screen_off_after_ms,
        }
    }

    /// Apply a gesture
    ///
    /// While the screen is off the gesture only counts as activity; the
    /// next [`UiState::update_power`] wakes the screen. Returns the preset
    /// to send when the gesture commits a selection.
    pub fn handle_gesture(
        &mut self,
        gesture: Gesture,
        list: &mut StatusList,
        now_ms: u32,
    ) -> Option<Selection> {
        self.last_input_ms = now_ms;
        if !self.screen_on {
            self.wake_pending = true;
            return None;
        }

        let mut selection = None;
        match (self.mode, gesture) {
            (DisplayMode::Main, Gesture::Increase) => self.cursor_down(list.len()),
            (DisplayMode::Main, Gesture::Decrease) => self.cursor_up(),
            (DisplayMode::ExpirySelect, Gesture::Increase | Gesture::Decrease) => {
                if let Some(item) = list.get_mut(self.selected_index()) {
                    item.adjust_expiry(gesture.rotation_delta());
                }
            }
            (mode, Gesture::Click) if mode.commits_on_click() => {
                selection = Some(Selection {
                    index: self.selected_index(),
                });
            }
            _ => {}
        }

        self.mode = self.mode.transition(gesture);
        self.dirty.body = true;
        selection
    }

    /// Replace the top line; only a different value dirties it
    pub fn set_top_status(&mut self, status: TopStatus) -> bool {
        if self.top_status == status {
            return false;
        }
        self.top_status = status;
        self.dirty.top = true;
        true
    }

    /// Replace the bottom line; only a different value dirties it
    pub fn set_bottom_status(&mut self, status: BottomStatus) -> bool {
        if self.bottom_status == status {
            return false;
        }
        self.bottom_status = status;
        self.dirty.bottom = true;
        true
    }

    /// Turn the screen off after the idle timeout, or back on after input
    ///
    /// A sleeping screen only wakes for a gesture received while asleep,
    /// never because the millisecond counter wrapped. Waking marks every
    /// region dirty.
    pub fn update_power(&mut self, now_ms: u32) -> Option<ScreenPower> {
        if self.screen_on {
            if elapsed_ms(now_ms, self.last_input_ms) < self.screen_off_after_ms {
                return None;
            }
            self.screen_on = false;
            return Some(ScreenPower::Slept);
        }

        if !self.wake_pending {
            return None;
        }
        self.wake_pending = false;
        self.screen_on = true;
        self.dirty = DirtyRegions::ALL;
        Some(ScreenPower::Woke)
    }

    /// Whole minutes left before the screen turns off
    pub fn minutes_until_sleep(&self, now_ms: u32) -> u32 {
        let idle = elapsed_ms(now_ms, self.last_input_ms);
        self.screen_off_after_ms.saturating_sub(idle) / 60_000
    }

    /// Clear all dirty flags after a repaint
    pub fn mark_clean(&mut self) {
        self.dirty = DirtyRegions::default();
    }

    /// Presets in the visible window with their list index
    pub fn visible<'a>(
        &self,
        list: &'a StatusList,
    ) -> impl Iterator<Item = (usize, &'a StatusListItem)> + 'a {
        list.iter()
            .enumerate()
            .skip(self.top_render_index)
            .take(VISIBLE_ROWS)
    }

    fn cursor_down(&mut self, len: usize) {
        let last_row = VISIBLE_ROWS.min(len).saturating_sub(1);
        if self.highlight_index < last_row {
            self.highlight_index += 1;
        } else if self.top_render_index < len.saturating_sub(VISIBLE_ROWS) {
            self.top_render_index += 1;
        }
    }

    fn cursor_up(&mut self) {
        if self.highlight_index > 0 {
            self.highlight_index -= 1;
        } else if self.top_render_index > 0 {
            self.top_render_index -= 1;
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn top_render_index(&self) -> usize {
        self.top_render_index
    }

    pub fn highlight_index(&self) -> usize {
        self.highlight_index
    }

    /// List index of the highlighted preset
    pub fn selected_index(&self) -> usize {
        self.top_render_index + self.highlight_index
    }

    pub fn dirty(&self) -> DirtyRegions {
        self.dirty
    }

    pub fn needs_repaint(&self) -> bool {
        self.dirty.any()
    }

    pub fn top_status(&self) -> &TopStatus {
        &self.top_status
    }

    pub fn bottom_status(&self) -> &BottomStatus {
        &self.bottom_status
    }

    pub fn is_screen_on(&self) -> bool {
        self.screen_on
    }

    pub fn last_input_ms(&self) -> u32 {
        self.last_input_ms
    }
}
