//! Single-slot, last-write-wins mailbox

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Holds at most one value; posting replaces any unread value
pub struct Mailbox<T> {
    slot: Signal<CriticalSectionRawMutex, T>,
}

impl<T: Send> Mailbox<T> {
    pub const fn new() -> Self {
        Self { slot: Signal::new() }
    }

    /// Store a value, superseding an unread one
    pub fn post(&self, value: T) {
        self.slot.signal(value);
    }

    /// Take the value if one is waiting
    pub fn take(&self) -> Option<T> {
        self.slot.try_take()
    }

    /// Check if a value is waiting without taking it
    pub fn is_full(&self) -> bool {
        self.slot.signaled()
    }
}

impl<T: Send> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}
