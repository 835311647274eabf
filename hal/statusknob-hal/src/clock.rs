//! Clock abstractions
//!
//! Two time sources are consumed:
//!
//! - A monotonic millisecond counter for debounce and interval math. It is a
//!   `u32` that wraps, like a hardware tick counter; consumers compare
//!   readings with wrapping arithmetic.
//! - A wall clock for expiry timestamps and the status-bar clock text.

/// Seconds between the Unix epoch (1970-01-01) and the embedded epoch
/// (2000-01-01) used by many microcontroller RTCs
pub const EMBEDDED_EPOCH_OFFSET_SECS: u64 = 946_684_800;

/// Monotonic millisecond counter
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary origin, wrapping at `u32::MAX`
    fn now_ms(&self) -> u32;
}

impl<T: MonotonicClock + ?Sized> MonotonicClock for &T {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Broken-down local time for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Day of week, 0 = Sunday
    pub weekday: u8,
    /// Hour 0-23
    pub hour: u8,
    /// Minute 0-59
    pub minute: u8,
    /// Second 0-59
    pub second: u8,
}

/// Wall-clock time source
///
/// Timezone and calendar handling live behind this trait.
pub trait WallClock {
    /// Seconds since the platform epoch
    fn platform_seconds(&self) -> u64;

    /// Offset to add to [`WallClock::platform_seconds`] to get Unix time
    ///
    /// Defaults to the embedded 2000-01-01 epoch.
    fn epoch_offset_secs(&self) -> u64 {
        EMBEDDED_EPOCH_OFFSET_SECS
    }

    /// Seconds since the Unix epoch
    fn unix_seconds(&self) -> u64 {
        self.platform_seconds() + self.epoch_offset_secs()
    }

    /// Current local time, already adjusted for the configured timezone
    fn local_time(&self) -> ClockTime;
}

impl<T: WallClock + ?Sized> WallClock for &T {
    fn platform_seconds(&self) -> u64 {
        (**self).platform_seconds()
    }

    fn epoch_offset_secs(&self) -> u64 {
        (**self).epoch_offset_secs()
    }

    fn local_time(&self) -> ClockTime {
        (**self).local_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedClock(u64);

    impl WallClock for FixedClock {
        fn platform_seconds(&self) -> u64 {
            self.0
        }

        fn local_time(&self) -> ClockTime {
            ClockTime {
                weekday: 0,
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }

    #[test]
    fn test_unix_seconds_applies_embedded_offset() {
        let clock = FixedClock(10);
        assert_eq!(clock.unix_seconds(), 946_684_810);
    }
}
