//! Configuration validation
//!
//! Turns raw, possibly incomplete values into an [`AppConfig`]. Errors name
//! the offending key and, for presets, the item index so the message can be
//! shown as-is on the boot screen.

use heapless::String;

use super::types::{AppConfig, RuntimeTuning, WifiCredentials};
use crate::status::{StatusList, StatusListItem, MAX_EXPIRY_MINUTES, MAX_STATUS_ITEMS};

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Required key absent
    Missing(&'static str),
    /// Required key present but blank
    Empty(&'static str),
    /// Value longer than its fixed capacity
    TooLong(&'static str),
    /// No status presets configured
    NoStatuses,
    /// More presets than the list can hold
    TooManyStatuses(usize),
    /// Preset is missing a required key
    ItemMissing { index: usize, key: &'static str },
    /// Preset value longer than its fixed capacity
    ItemTooLong { index: usize, key: &'static str },
    /// Runtime value out of range
    InvalidRuntime(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing {}", key),
            ConfigError::Empty(key) => write!(f, "{} is empty", key),
            ConfigError::TooLong(key) => write!(f, "{} is too long", key),
            ConfigError::NoStatuses => write!(f, "status_list is empty"),
            ConfigError::TooManyStatuses(n) => {
                write!(f, "status_list has {} items, max {}", n, MAX_STATUS_ITEMS)
            }
            ConfigError::ItemMissing { index, key } => {
                write!(f, "status_list Item {} missing {}", index, key)
            }
            ConfigError::ItemTooLong { index, key } => {
                write!(f, "status_list Item {} {} is too long", index, key)
            }
            ConfigError::InvalidRuntime(key) => write!(f, "runtime.{} must be positive", key),
        }
    }
}

/// Unvalidated status preset
#[derive(Debug, Clone, Copy, Default)]
pub struct RawStatusItem<'a> {
    pub display: Option<&'a str>,
    pub status: Option<&'a str>,
    pub emoji: Option<&'a str>,
    pub expiry: Option<i64>,
}

/// Unvalidated configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RawConfig<'a> {
    pub ssid: Option<&'a str>,
    pub password: Option<&'a str>,
    pub token: Option<&'a str>,
    pub timezone: Option<&'a str>,
    pub statuses: &'a [RawStatusItem<'a>],
    pub runtime: RuntimeTuning,
}

fn required<'a>(value: Option<&'a str>, key: &'static str) -> Result<&'a str, ConfigError> {
    match value {
        None => Err(ConfigError::Missing(key)),
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty(key)),
        Some(v) => Ok(v),
    }
}

fn fixed<const N: usize>(value: &str, key: &'static str) -> Result<String<N>, ConfigError> {
    String::try_from(value).map_err(|_| ConfigError::TooLong(key))
}

fn validate_item(index: usize, raw: &RawStatusItem<'_>) -> Result<StatusListItem, ConfigError> {
    let present = |value: Option<&str>, key: &'static str| match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(ConfigError::ItemMissing { index, key }),
    };
    present(raw.status, "status")?;
    present(raw.emoji, "emoji")?;
    let expiry = raw.expiry.ok_or(ConfigError::ItemMissing {
        index,
        key: "expiry",
    })?;
    // Clamped into u16 range
    let expiry = expiry.clamp(0, i64::from(MAX_EXPIRY_MINUTES)) as u16;

    // A blank label falls back to the status text
    let display = raw.display.filter(|d| !d.trim().is_empty());
    StatusListItem::new(
        display,
        raw.status.unwrap_or_default(),
        raw.emoji.unwrap_or_default(),
        expiry,
    )
    .map_err(|field| ConfigError::ItemTooLong {
        index,
        key: field.key(),
    })
}

fn validate_runtime(runtime: &RuntimeTuning) -> Result<(), ConfigError> {
    if runtime.watchdog_budget == 0 {
        return Err(ConfigError::InvalidRuntime("watchdog_budget"));
    }
    if runtime.worker_sleep_ms == 0 {
        return Err(ConfigError::InvalidRuntime("worker_sleep_ms"));
    }
    if runtime.fetch_interval_s == 0 {
        return Err(ConfigError::InvalidRuntime("fetch_interval_s"));
    }
    if runtime.screen_off_minutes == 0 {
        return Err(ConfigError::InvalidRuntime("screen_off_minutes"));
    }
    Ok(())
}

/// Validate raw configuration values
pub fn validate(raw: &RawConfig<'_>) -> Result<AppConfig, ConfigError> {
    let ssid = required(raw.ssid, "wifi.ssid")?;
    let password = raw.password.ok_or(ConfigError::Missing("wifi.password"))?;
    let token = required(raw.token, "remote.token")?;
    let timezone = required(raw.timezone, "timezone")?;

    if raw.statuses.is_empty() {
        return Err(ConfigError::NoStatuses);
    }
    if raw.statuses.len() > MAX_STATUS_ITEMS {
        return Err(ConfigError::TooManyStatuses(raw.statuses.len()));
    }

    let mut statuses = StatusList::new();
    for (index, item) in raw.statuses.iter().enumerate() {
        let item = validate_item(index, item)?;
        statuses
            .push(item)
            .map_err(|_| ConfigError::TooManyStatuses(raw.statuses.len()))?;
    }

    validate_runtime(&raw.runtime)?;

    Ok(AppConfig {
        wifi: WifiCredentials {
            ssid: fixed(ssid, "wifi.ssid")?,
            password: fixed(password, "wifi.password")?,
        },
        token: fixed(token.trim(), "remote.token")?,
        timezone: fixed(timezone.trim(), "timezone")?,
        statuses,
        runtime: raw.runtime,
    })
}
