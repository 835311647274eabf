//! Heartbeat counter keeping the remote worker alive
//!
//! The cooperative scheduler replenishes the counter to its full budget on
//! every tick; the worker thread consumes one unit per iteration and stops
//! once nothing is left. A stalled scheduler therefore bounds the worker's
//! remaining lifetime to `budget` iterations.
//!
//! The replenish and the decrement may race. The counter is advisory, so a
//! lost decrement only buys the worker one extra iteration.

use portable_atomic::{AtomicU32, Ordering};

/// Default number of worker iterations per heartbeat
pub const DEFAULT_WATCHDOG_BUDGET: u32 = 25;

/// Shared heartbeat counter
#[derive(Debug)]
pub struct WatchdogCounter {
    remaining: AtomicU32,
    budget: u32,
}

impl WatchdogCounter {
    /// Create a counter already filled to `budget`
    pub const fn new(budget: u32) -> Self {
        Self {
            remaining: AtomicU32::new(budget),
            budget,
        }
    }

    /// Refill to the full budget
    pub fn replenish(&self) {
        self.remaining.store(self.budget, Ordering::Release);
    }

    /// Consume one unit, saturating at zero
    ///
    /// Returns the units left afterwards.
    pub fn consume(&self) -> u32 {
        let previous = self
            .remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| Some(n.saturating_sub(1)))
            .unwrap_or(0);
        previous.saturating_sub(1)
    }

    /// Check if the worker may keep running
    pub fn is_alive(&self) -> bool {
        self.remaining() > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining.load(Ordering::Acquire)
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }
}

impl Default for WatchdogCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WATCHDOG_BUDGET)
    }
}
