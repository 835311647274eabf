//! Remote status worker thread
//!
//! The only code that blocks on the network. Each iteration:
//!
//! 1. Applies the latest connectivity verdict to the fetch gate
//! 2. Sends a pending status, if any and the pipeline is enabled
//! 3. Fetches the current status when the fetch gate opens
//! 4. Consumes one watchdog unit and sleeps
//!
//! The loop ends once the watchdog runs dry, which happens only when the
//! heartbeat task stops replenishing it. There is no other way to stop it.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use embedded_hal::delay::DelayNs;
use log::{debug, error, info, warn};
use statusknob_core::bridge::Bridge;
use statusknob_core::config::RuntimeTuning;
use statusknob_core::state::TopStatus;
use statusknob_core::status::OutboundStatus;
use statusknob_core::timing::IntervalGate;
use statusknob_core::traits::RemoteStatusClient;
use statusknob_hal::MonotonicClock;

/// Summary returned when the worker stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerReport {
    pub iterations: u32,
}

/// Blocking remote status pipeline
pub struct RemoteWorker<R, C, D> {
    client: R,
    clock: C,
    delay: D,
    bridge: &'static Bridge,
    fetch_gate: IntervalGate,
    sleep_ms: u32,
}

impl<R, C, D> RemoteWorker<R, C, D>
where
    R: RemoteStatusClient,
    C: MonotonicClock,
    D: DelayNs,
{
    /// Create a worker; fetching stays disabled until the link is up
    pub fn new(client: R, clock: C, delay: D, bridge: &'static Bridge, runtime: &RuntimeTuning) -> Self {
        Self {
            client,
            clock,
            delay,
            bridge,
            fetch_gate: IntervalGate::disabled(runtime.fetch_interval_ms()),
            sleep_ms: runtime.worker_sleep_ms,
        }
    }

    /// Run on a dedicated thread
    pub fn spawn(self) -> io::Result<JoinHandle<WorkerReport>>
    where
        R: Send + 'static,
        C: Send + 'static,
        D: Send + 'static,
    {
        thread::Builder::new()
            .name("remote-worker".into())
            .spawn(move || self.run())
    }

    /// Loop until the watchdog is exhausted
    pub fn run(mut self) -> WorkerReport {
        info!("Remote worker started");
        let mut iterations = 0;

        while self.bridge.watchdog.is_alive() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.iterate()));
            if outcome.is_err() {
                warn!("remote worker iteration panicked");
                self.bridge.publish_top_status(TopStatus::message("Error"));
            }

            iterations += 1;
            self.bridge.watchdog.consume();
            self.delay.delay_ms(self.sleep_ms);
        }

        debug!(
            "watchdog exhausted after {} iterations, remote worker stopping",
            iterations
        );
        WorkerReport { iterations }
    }

    fn iterate(&mut self) {
        if let Some(enabled) = self.bridge.remote_enable.take() {
            if self.fetch_gate.enable(enabled, true) {
                debug!(
                    "remote status pipeline {}",
                    if enabled { "enabled" } else { "disabled" }
                );
            }
        }

        if let Some(pending) = self.bridge.pending.take() {
            if self.fetch_gate.is_enabled() {
                self.send(&pending);
            } else {
                debug!("discarding pending status, remote pipeline disabled");
            }
        }

        if self.fetch_gate.has_passed(self.clock.now_ms()) {
            self.fetch();
        }
    }

    fn send(&mut self, status: &OutboundStatus) {
        // Show the result of the send as soon as possible
        self.fetch_gate.reset();

        info!(
            "sending status \"{}\" {} (expires {})",
            status.text, status.emoji, status.expiry_epoch
        );
        self.bridge.publish_top_status(TopStatus::message("Sending..."));

        if let Err(err) = self.client.send_status(status) {
            error!("status send failed: {}", err);
            self.bridge.publish_top_status(err.to_top_status());
        }
    }

    fn fetch(&mut self) {
        info!("retrieving current status");
        self.bridge.publish_top_status(TopStatus::message("Retrieving..."));

        match self.client.fetch_current_status() {
            Ok(profile) => {
                info!("current status retrieved");
                self.bridge.publish_top_status(profile.to_top_status());
            }
            Err(err) => {
                error!("status fetch failed: {}", err);
                self.bridge.publish_top_status(err.to_top_status());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use embassy_futures::block_on;
    use embassy_futures::select::select;
    use embassy_time::Timer;
    use statusknob_core::status::StatusListItem;
    use statusknob_core::traits::{RemoteError, RemoteProfile};

    use crate::host::{NoDelay, StdDelay, SystemClock};
    use crate::scheduler::EmbassyClock;
    use crate::tasks::heartbeat;

    #[derive(Clone, Default)]
    struct Counting {
        fetches: Arc<AtomicU32>,
        sent: Arc<Mutex<Vec<String>>>,
        fail_with: Option<RemoteError>,
        panic_on_fetch: bool,
    }

    impl RemoteStatusClient for Counting {
        fn fetch_current_status(&mut self) -> Result<RemoteProfile, RemoteError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.panic_on_fetch {
                panic!("client bug");
            }
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(RemoteProfile::new("Grace Hopper", "Debugging", ":bug:")),
            }
        }

        fn send_status(&mut self, status: &OutboundStatus) -> Result<(), RemoteError> {
            self.sent.lock().unwrap().push(status.text.to_string());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn leak_bridge(budget: u32) -> &'static Bridge {
        Box::leak(Box::new(Bridge::new(budget)))
    }

    fn every_iteration() -> RuntimeTuning {
        RuntimeTuning {
            // Fetch gate reopens on every iteration
            fetch_interval_s: 0,
            ..RuntimeTuning::default()
        }
    }

    fn outbound(text: &str) -> OutboundStatus {
        let item = StatusListItem::new(None, text, ":memo:", 0).unwrap();
        OutboundStatus::from_item(&item, &SystemClock::new())
    }

    #[test]
    fn test_watchdog_exhaustion_stops_worker() {
        let bridge = leak_bridge(25);
        bridge.set_remote_enabled(true);
        let client = Counting::default();
        let fetches = client.fetches.clone();

        let worker = RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &every_iteration());
        let report = worker.spawn().unwrap().join().unwrap();

        assert_eq!(report.iterations, 25);
        assert_eq!(fetches.load(Ordering::SeqCst), 25);
        assert_eq!(bridge.watchdog.remaining(), 0);
    }

    #[test]
    fn test_disabled_pipeline_discards_pending() {
        let bridge = leak_bridge(1);
        let client = Counting::default();
        let sent = client.sent.clone();
        let fetches = client.fetches.clone();
        bridge.submit(outbound("Lunch"));

        let report = RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &RuntimeTuning::default()).run();

        assert_eq!(report.iterations, 1);
        assert!(sent.lock().unwrap().is_empty());
        assert_eq!(fetches.load(Ordering::SeqCst), 0);
        assert!(!bridge.pending.is_full());
    }

    #[test]
    fn test_send_then_fetch_in_same_iteration() {
        let bridge = leak_bridge(1);
        bridge.set_remote_enabled(true);
        bridge.submit(outbound("Lunch"));
        let client = Counting::default();
        let sent = client.sent.clone();
        let fetches = client.fetches.clone();

        RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &RuntimeTuning::default()).run();

        assert_eq!(*sent.lock().unwrap(), ["Lunch"]);
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        let top = bridge.fetched.take().unwrap();
        assert_eq!(top.name(), "Grace");
        assert_eq!(top.status(), Some("Debugging"));
    }

    #[test]
    fn test_fetch_paced_by_interval() {
        let bridge = leak_bridge(10);
        bridge.set_remote_enabled(true);
        let client = Counting::default();
        let fetches = client.fetches.clone();

        // The run is far shorter than the fetch interval
        RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &RuntimeTuning::default()).run();
        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_http_failure_shown_on_top_line() {
        let bridge = leak_bridge(1);
        bridge.set_remote_enabled(true);
        let client = Counting {
            fail_with: Some(RemoteError::Http(503)),
            ..Counting::default()
        };

        RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &RuntimeTuning::default()).run();
        assert_eq!(bridge.fetched.take().unwrap().name(), "HTTP[503]");
    }

    #[test]
    fn test_panicking_client_shows_error_and_continues() {
        let bridge = leak_bridge(3);
        bridge.set_remote_enabled(true);
        let client = Counting {
            panic_on_fetch: true,
            ..Counting::default()
        };
        let fetches = client.fetches.clone();

        let report =
            RemoteWorker::new(client, EmbassyClock, NoDelay, bridge, &every_iteration()).run();
        assert_eq!(report.iterations, 3);
        assert_eq!(fetches.load(Ordering::SeqCst), 3);
        assert_eq!(bridge.fetched.take().unwrap().name(), "Error");
    }

    #[test]
    fn test_heartbeat_keeps_worker_alive() {
        let bridge = leak_bridge(2);
        let worker = RemoteWorker::new(
            Counting::default(),
            EmbassyClock,
            StdDelay,
            bridge,
            &every_iteration(),
        );
        let handle = worker.spawn().unwrap();

        // Two units of budget last 200 ms on their own
        block_on(select(heartbeat(&bridge.watchdog), Timer::after_millis(500)));
        let report = handle.join().unwrap();
        assert!(report.iterations >= 4, "{} iterations", report.iterations);
        assert!(!bridge.watchdog.is_alive());
    }
}
