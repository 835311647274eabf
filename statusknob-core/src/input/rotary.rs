//! Rotary encoder gesture source
//!
//! Rotation is edge triggered: the encoder driver notifies the tracker on
//! every position change, usually from interrupt context. The tracker turns
//! each change into a single `Increase` or `Decrease` and queues it for the
//! gesture task, which drains the queue on its next tick.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicI32, AtomicU32, Ordering};
use statusknob_hal::RotaryListener;

use super::events::Gesture;

/// Default depth of the rotation queue
pub const ROTARY_QUEUE_DEPTH: usize = 8;

/// Converts encoder position changes into queued gestures
pub struct RotaryTracker<const N: usize = ROTARY_QUEUE_DEPTH> {
    previous: AtomicI32,
    queue: Channel<CriticalSectionRawMutex, Gesture, N>,
    dropped: AtomicU32,
}

impl<const N: usize> RotaryTracker<N> {
    /// Create a tracker starting from the encoder's current position
    pub const fn new(initial_position: i32) -> Self {
        Self {
            previous: AtomicI32::new(initial_position),
            queue: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Take the oldest queued rotation gesture
    pub fn try_next(&self) -> Option<Gesture> {
        self.queue.try_receive().ok()
    }

    /// Number of gestures dropped on a full queue since the last call
    pub fn take_dropped(&self) -> u32 {
        self.dropped.swap(0, Ordering::Relaxed)
    }
}

impl<const N: usize> RotaryListener for RotaryTracker<N> {
    fn on_change(&self, position: i32) {
        let previous = self.previous.swap(position, Ordering::Relaxed);
        let gesture = match position.cmp(&previous) {
            core::cmp::Ordering::Greater => Gesture::Increase,
            core::cmp::Ordering::Less => Gesture::Decrease,
            core::cmp::Ordering::Equal => return,
        };

        if self.queue.try_send(gesture).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}
