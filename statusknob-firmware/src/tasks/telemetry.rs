//! Periodic diagnostics at debug level

use log::debug;
use statusknob_core::timing::elapsed_ms;

use crate::context::AppContext;
use crate::scheduler::{CooperativeTask, TaskError};

/// Report cadence
pub const TELEMETRY_INTERVAL_MS: u32 = 5000;

#[derive(Debug, Default)]
pub struct TelemetryTask;

impl TelemetryTask {
    pub fn new() -> Self {
        Self
    }
}

impl CooperativeTask for TelemetryTask {
    fn name(&self) -> &'static str {
        "Telemetry"
    }

    fn poll(&mut self, ctx: &mut AppContext, now_ms: u32) -> Result<(), TaskError> {
        debug!(
            "link={:?} rssi={}dBm mode={:?} screen={} uptime={}s watchdog={}/{}",
            ctx.link.state,
            ctx.link.rssi_dbm,
            ctx.ui.mode(),
            if ctx.ui.is_screen_on() { "on" } else { "off" },
            elapsed_ms(now_ms, ctx.boot_ms) / 1000,
            ctx.bridge.watchdog.remaining(),
            ctx.bridge.watchdog.budget(),
        );
        Ok(())
    }

    fn next_delay_ms(&self, _ctx: &AppContext) -> u32 {
        TELEMETRY_INTERVAL_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::test_support::context;

    #[test]
    fn test_report_never_fails() {
        let mut task = TelemetryTask::new();
        let mut ctx = context(2);
        ctx.bridge.watchdog.consume();

        task.poll(&mut ctx, 65_000).unwrap();
        assert_eq!(task.next_delay_ms(&ctx), TELEMETRY_INTERVAL_MS);
        // Reporting leaves shared state alone
        assert_eq!(ctx.bridge.watchdog.remaining(), ctx.bridge.watchdog.budget() - 1);
    }
}
