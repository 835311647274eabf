//! Renderer trait
//!
//! The renderer paints whatever the UI state says is dirty. It has no way to
//! call back into the core.

use crate::state::{DirtyRegions, UiState};
use crate::status::StatusList;

use super::network::LinkStatus;

/// Errors reported by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Display bus transfer failed
    Bus,
    /// Display did not respond
    NotResponding,
}

impl core::fmt::Display for RenderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RenderError::Bus => write!(f, "display bus error"),
            RenderError::NotResponding => write!(f, "display not responding"),
        }
    }
}

/// Everything a renderer needs for one repaint
pub struct Frame<'a> {
    pub ui: &'a UiState,
    pub list: &'a StatusList,
    /// Network details for the info screen
    pub link: &'a LinkStatus,
    /// Regions to repaint
    pub regions: DirtyRegions,
}

/// Display output
pub trait Renderer {
    /// Repaint the regions listed in the frame
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError>;

    /// Blank or restore the panel
    fn set_sleep(&mut self, asleep: bool) -> Result<(), RenderError>;
}
