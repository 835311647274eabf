//! Configuration types and validation
//!
//! Board-agnostic configuration structures. Every runtime parses its own
//! file format and validates through [`validate`], so all targets apply the
//! same rules.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{validate, ConfigError, RawConfig, RawStatusItem};
