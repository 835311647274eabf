//! Statusknob runtime
//!
//! Hosts the board-agnostic event core on a std thread pair:
//!
//! - an embassy executor running the UI [`tasks`] through [`scheduler`]
//! - the blocking [`remote`] worker talking to the status service
//!
//! The two only share the core's bridge.

pub mod config;
pub mod context;
pub mod host;
pub mod remote;
pub mod scheduler;
pub mod tasks;
