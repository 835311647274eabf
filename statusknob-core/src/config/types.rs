//! Configuration type definitions
//!
//! Validated configuration held by the runtime. The file format is owned by
//! the runtime; it hands raw values to [`super::validate`].

use heapless::String;

use crate::bridge::DEFAULT_WATCHDOG_BUDGET;
use crate::status::StatusList;
use crate::traits::SSID_CAPACITY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum Wi-Fi passphrase length
pub const PASSWORD_CAPACITY: usize = 64;

/// Maximum API token length
pub const TOKEN_CAPACITY: usize = 128;

/// Maximum timezone identifier length
pub const TIMEZONE_CAPACITY: usize = 64;

/// Wi-Fi credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String<SSID_CAPACITY>,
    pub password: String<PASSWORD_CAPACITY>,
}

/// Runtime tuning knobs
///
/// Every field has a default, so the whole table is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuntimeTuning {
    /// Worker iterations allowed per scheduler heartbeat
    pub watchdog_budget: u32,
    /// Worker sleep between iterations (ms)
    pub worker_sleep_ms: u32,
    /// Remote status fetch cadence (seconds)
    pub fetch_interval_s: u32,
    /// Idle time before the screen turns off (minutes)
    pub screen_off_minutes: u32,
    /// Log debug telemetry every few seconds
    pub telemetry: bool,
}

impl Default for RuntimeTuning {
    fn default() -> Self {
        Self {
            watchdog_budget: DEFAULT_WATCHDOG_BUDGET,
            worker_sleep_ms: 100,
            fetch_interval_s: 60,
            screen_off_minutes: 60,
            telemetry: true,
        }
    }
}

impl RuntimeTuning {
    pub fn fetch_interval_ms(&self) -> u32 {
        self.fetch_interval_s.saturating_mul(1000)
    }

    pub fn screen_off_ms(&self) -> u32 {
        self.screen_off_minutes.saturating_mul(60_000)
    }
}

/// Complete validated configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub wifi: WifiCredentials,
    /// Remote service API token
    pub token: String<TOKEN_CAPACITY>,
    /// Timezone identifier, interpreted by the wall clock
    pub timezone: String<TIMEZONE_CAPACITY>,
    /// Status presets, never empty
    pub statuses: StatusList,
    pub runtime: RuntimeTuning,
}
