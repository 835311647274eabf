//! Remote status pipeline
//!
//! Runs on its own thread, connected to the cooperative side only through
//! the core's bridge.

pub mod worker;

pub use worker::{RemoteWorker, WorkerReport};
