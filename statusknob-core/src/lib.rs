//! Board-agnostic event core for the Statusknob status display
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or an operating system:
//!
//! - Interval gates pacing every periodic activity
//! - Button gesture recognition and rotary step tracking
//! - UI state machine (modes, list cursor, dirty regions, screen power)
//! - Status presets and outbound status updates
//! - The shared boundary between the cooperative context and the remote
//!   worker (watchdog counter and single-slot mailboxes)
//! - Collaborator traits (renderer, network link, remote status service)
//! - Configuration types and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod config;
pub mod input;
pub mod state;
pub mod status;
pub mod timing;
pub mod traits;
