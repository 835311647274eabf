//! Host time sources and delays

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use embedded_hal::delay::DelayNs;
use statusknob_hal::{ClockTime, WallClock};

const SECS_PER_DAY: u64 = 86_400;

/// Wall clock backed by the operating system
///
/// Reports Unix time directly, so the epoch offset is zero. Local time is
/// UTC; timezone handling belongs to the board's calendar support.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    fn platform_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn epoch_offset_secs(&self) -> u64 {
        0
    }

    fn local_time(&self) -> ClockTime {
        utc_time(self.unix_seconds())
    }
}

/// Break Unix seconds down into a UTC weekday and time of day
pub fn utc_time(unix_seconds: u64) -> ClockTime {
    let days = unix_seconds / SECS_PER_DAY;
    let secs = unix_seconds % SECS_PER_DAY;
    ClockTime {
        // 1970-01-01 was a Thursday
        weekday: ((days + 4) % 7) as u8,
        hour: (secs / 3600) as u8,
        minute: (secs % 3600 / 60) as u8,
        second: (secs % 60) as u8,
    }
}

/// Delay that blocks the calling thread
///
/// For the remote worker, which runs outside the executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Delay that returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_breakdown() {
        // 2024-03-15 13:45:30 UTC, a Friday
        let t = utc_time(1_710_510_330);
        assert_eq!(t.weekday, 5);
        assert_eq!((t.hour, t.minute, t.second), (13, 45, 30));

        let epoch = utc_time(0);
        assert_eq!(epoch.weekday, 4);
        assert_eq!(epoch.hour, 0);
    }

    #[test]
    fn test_system_clock_reports_unix_time() {
        let clock = SystemClock::new();
        assert_eq!(clock.epoch_offset_secs(), 0);
        // Any sane host clock is past 2020-01-01
        assert!(clock.unix_seconds() > 1_577_836_800);
    }
}
