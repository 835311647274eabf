//! Clock synchronisation task
//!
//! Retries every couple of seconds until the first successful sync, then
//! refreshes a few times a day. Does nothing while the link is down.

use log::info;
use statusknob_core::traits::TimeSync;

use crate::context::AppContext;
use crate::scheduler::{CooperativeTask, TaskError};

/// Retry cadence until the clock has been set once
pub const RETRY_INTERVAL_MS: u32 = 2000;

/// Refresh cadence after the first sync
pub const RESYNC_INTERVAL_MS: u32 = 6 * 60 * 60 * 1000;

pub struct ClockSyncTask<T> {
    source: T,
    synced: bool,
}

impl<T: TimeSync> ClockSyncTask<T> {
    pub fn new(source: T) -> Self {
        Self {
            source,
            synced: false,
        }
    }

    #[cfg(test)]
    fn is_synced(&self) -> bool {
        self.synced
    }
}

impl<T: TimeSync> CooperativeTask for ClockSyncTask<T> {
    fn name(&self) -> &'static str {
        "ClockSync"
    }

    fn poll(&mut self, ctx: &mut AppContext, _now_ms: u32) -> Result<(), TaskError> {
        if !ctx.link.is_connected() {
            return Ok(());
        }

        self.source.sync()?;
        if !self.synced {
            info!("Clock synchronised");
        }
        self.synced = true;
        Ok(())
    }

    fn next_delay_ms(&self, _ctx: &AppContext) -> u32 {
        if self.synced {
            RESYNC_INTERVAL_MS
        } else {
            RETRY_INTERVAL_MS
        }
    }
}
