//! Statusknob Hardware Abstraction Layer
//!
//! This crate defines the capability traits the event core consumes from
//! the board: the encoder push button, the encoder rotation counter, and
//! the clocks. A board crate (or the host runtime) implements them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Runtime (statusknob-firmware, etc.)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  statusknob-core (gestures, UI state)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  statusknob-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::ButtonPin`] - Debounced push-button sampling
//! - [`rotary::RotaryEncoder`], [`rotary::RotaryListener`] - Rotation change notification
//! - [`clock::MonotonicClock`], [`clock::WallClock`] - Time sources

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;
pub mod rotary;

// Re-export key traits at crate root for convenience
pub use clock::{ClockTime, MonotonicClock, WallClock, EMBEDDED_EPOCH_OFFSET_SECS};
pub use gpio::ButtonPin;
pub use rotary::{RotaryEncoder, RotaryListener};
