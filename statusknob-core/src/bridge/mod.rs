//! Shared state between the cooperative context and the remote worker
//!
//! Nothing else crosses between the two contexts:
//!
//! - `watchdog`: replenished by the scheduler, consumed by the worker
//! - `pending`: status committed by the user, waiting to be sent
//! - `fetched`: latest top line produced by the worker
//! - `remote_enable`: connectivity verdict from the network task
//!
//! Mailboxes are single-slot and last-write-wins: a newer selection
//! silently replaces an unsent one.

pub mod mailbox;
pub mod watchdog;

pub use mailbox::Mailbox;
pub use watchdog::{WatchdogCounter, DEFAULT_WATCHDOG_BUDGET};

use crate::state::TopStatus;
use crate::status::OutboundStatus;

/// Cross-context boundary
pub struct Bridge {
    pub watchdog: WatchdogCounter,
    pub pending: Mailbox<OutboundStatus>,
    pub fetched: Mailbox<TopStatus>,
    pub remote_enable: Mailbox<bool>,
}

impl Bridge {
    pub const fn new(watchdog_budget: u32) -> Self {
        Self {
            watchdog: WatchdogCounter::new(watchdog_budget),
            pending: Mailbox::new(),
            fetched: Mailbox::new(),
            remote_enable: Mailbox::new(),
        }
    }

    /// Queue a committed status for the worker
    pub fn submit(&self, status: OutboundStatus) {
        self.pending.post(status);
    }

    /// Enable or disable the remote pipeline
    pub fn set_remote_enabled(&self, enabled: bool) {
        self.remote_enable.post(enabled);
    }

    /// Publish a new top line toward the UI
    pub fn publish_top_status(&self, status: TopStatus) {
        self.fetched.post(status);
    }
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new(DEFAULT_WATCHDOG_BUDGET)
    }
}
