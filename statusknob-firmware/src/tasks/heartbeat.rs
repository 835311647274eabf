//! Watchdog heartbeat
//!
//! Refills the remote worker's watchdog every 100 ms while the executor is
//! alive. Once it stops, the worker exits after its remaining budget.

use embassy_time::{Duration, Ticker};
use log::info;
use statusknob_core::bridge::WatchdogCounter;

/// Replenish cadence
pub const HEARTBEAT_INTERVAL_MS: u64 = 100;

/// Replenish `watchdog` forever
pub async fn heartbeat(watchdog: &WatchdogCounter) {
    info!("Heartbeat task started");
    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_INTERVAL_MS));

    loop {
        watchdog.replenish();
        ticker.next().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_futures::select::{select, Either};
    use embassy_time::Timer;

    #[test]
    fn test_refills_drained_watchdog() {
        let watchdog = WatchdogCounter::new(4);
        while watchdog.consume() > 0 {}
        assert!(!watchdog.is_alive());

        let outcome = block_on(select(heartbeat(&watchdog), Timer::after_millis(20)));
        assert!(matches!(outcome, Either::Second(())));
        assert_eq!(watchdog.remaining(), 4);
    }

    #[test]
    fn test_keeps_refilling_on_each_tick() {
        let watchdog = WatchdogCounter::new(3);
        let drain = async {
            // Drain between ticks, twice
            Timer::after_millis(HEARTBEAT_INTERVAL_MS / 2).await;
            for _ in 0..2 {
                while watchdog.consume() > 0 {}
                Timer::after_millis(HEARTBEAT_INTERVAL_MS).await;
                assert_eq!(watchdog.remaining(), 3);
            }
        };

        let outcome = block_on(select(heartbeat(&watchdog), drain));
        assert!(matches!(outcome, Either::Second(())));
    }
}
