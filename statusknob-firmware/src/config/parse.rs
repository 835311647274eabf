//! TOML configuration file
//!
//! Deserialized into owned raw structs, then handed to the core validator
//! as borrowed [`RawConfig`] values.
//!
//! ```toml
//! timezone = "Europe/Oslo"
//!
//! [wifi]
//! ssid = "office"
//! password = "hunter22"
//!
//! [remote]
//! token = "xoxp-1234"
//!
//! [[status]]
//! display = "Lunch"
//! status = "Out to lunch"
//! emoji = ":pizza:"
//! expiry = 60
//!
//! [runtime]
//! fetch_interval_s = 30
//! ```

use serde::Deserialize;
use statusknob_core::config::{validate, AppConfig, RawConfig, RawStatusItem, RuntimeTuning};

use super::LoadError;

#[derive(Debug, Default, Deserialize)]
struct RawWifi {
    ssid: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRemote {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    display: Option<String>,
    status: Option<String>,
    emoji: Option<String>,
    expiry: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawFile {
    #[serde(default)]
    wifi: RawWifi,
    #[serde(default)]
    remote: RawRemote,
    timezone: Option<String>,
    #[serde(default)]
    status: Vec<RawStatus>,
    #[serde(default)]
    runtime: RuntimeTuning,
}

/// Parse and validate configuration text
pub fn parse(text: &str) -> Result<AppConfig, LoadError> {
    let file: RawFile = toml::from_str(text)?;

    let statuses: Vec<RawStatusItem<'_>> = file
        .status
        .iter()
        .map(|s| RawStatusItem {
            display: s.display.as_deref(),
            status: s.status.as_deref(),
            emoji: s.emoji.as_deref(),
            expiry: s.expiry,
        })
        .collect();

    let raw = RawConfig {
        ssid: file.wifi.ssid.as_deref(),
        password: file.wifi.password.as_deref(),
        token: file.remote.token.as_deref(),
        timezone: file.timezone.as_deref(),
        statuses: &statuses,
        runtime: file.runtime,
    };
    Ok(validate(&raw)?)
}
