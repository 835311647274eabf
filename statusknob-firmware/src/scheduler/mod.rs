//! Cooperative task plumbing
//!
//! Every logical task is an embassy task on the one executor thread. Each
//! does a bounded amount of work per poll while holding the shared
//! context, then sleeps on an embassy timer for as long as it asks. The
//! executor only switches tasks at those awaits.

pub mod runner;

pub use runner::{run_task, EmbassyClock};

use statusknob_core::input::GestureError;
use statusknob_core::traits::{LinkError, RenderError, TimeSyncError};
use thiserror::Error;

use crate::context::AppContext;

/// Error from a single task iteration
#[derive(Debug, Error)]
pub enum TaskError {
    /// Logged; the task keeps its normal cadence
    #[error("{0}")]
    Recoverable(String),
    /// Ends the task and shuts the appliance down
    #[error("{0}")]
    Fatal(String),
}

impl TaskError {
    pub fn recoverable(reason: impl std::fmt::Display) -> Self {
        TaskError::Recoverable(reason.to_string())
    }

    pub fn fatal(reason: impl std::fmt::Display) -> Self {
        TaskError::Fatal(reason.to_string())
    }
}

impl From<GestureError> for TaskError {
    fn from(e: GestureError) -> Self {
        TaskError::fatal(e)
    }
}

impl From<RenderError> for TaskError {
    fn from(e: RenderError) -> Self {
        TaskError::recoverable(e)
    }
}

impl From<LinkError> for TaskError {
    fn from(e: LinkError) -> Self {
        TaskError::recoverable(e)
    }
}

impl From<TimeSyncError> for TaskError {
    fn from(e: TimeSyncError) -> Self {
        TaskError::recoverable(e)
    }
}

/// A task that stopped on a fatal error
#[derive(Debug, Error)]
#[error("{task} task failed: {reason}")]
pub struct TaskFailure {
    pub task: &'static str,
    pub reason: String,
}

/// A logical task driven by [`run_task`]
pub trait CooperativeTask {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Do one bounded unit of work
    fn poll(&mut self, ctx: &mut AppContext, now_ms: u32) -> Result<(), TaskError>;

    /// Time to sleep before the next poll
    ///
    /// Queried after every poll, including failed ones.
    fn next_delay_ms(&self, ctx: &AppContext) -> u32;
}
