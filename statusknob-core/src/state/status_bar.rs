//! Top and bottom status lines

use core::fmt::Write;

use heapless::String;
use statusknob_hal::ClockTime;

use crate::status::{truncated, STATUS_CAPACITY};

/// Capacity of the name shown on the top line
pub const TOP_NAME_CAPACITY: usize = 48;

/// Capacity of the formatted clock text
pub const CLOCK_TEXT_CAPACITY: usize = 16;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Network link state shown on the bottom line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    Error,
    #[default]
    NotConnected,
    Connecting,
    Connected,
}

impl LinkState {
    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected)
    }
}

/// Coarse signal strength bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalStrength {
    Weak,
    Medium,
    #[default]
    Strong,
}

impl SignalStrength {
    /// Bucket a received signal strength in dBm
    pub fn from_rssi(rssi_dbm: i8) -> Self {
        if rssi_dbm < -75 {
            SignalStrength::Weak
        } else if rssi_dbm < -60 {
            SignalStrength::Medium
        } else {
            SignalStrength::Strong
        }
    }
}

/// Top line: whose status, and what it is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TopStatus {
    name: String<TOP_NAME_CAPACITY>,
    status: Option<String<STATUS_CAPACITY>>,
}

impl TopStatus {
    /// Build a top line, trimming whitespace and truncating to capacity
    pub fn new(name: &str, status: Option<&str>) -> Self {
        Self {
            name: truncated(name.trim()),
            status: status.map(|s| truncated(s.trim())),
        }
    }

    /// A top line with only a name, used for progress and error text
    pub fn message(text: &str) -> Self {
        Self::new(text, None)
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.as_str())
    }
}

/// Bottom line: link, signal and clock
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BottomStatus {
    pub link: LinkState,
    pub signal: SignalStrength,
    pub clock: String<CLOCK_TEXT_CAPACITY>,
}

impl BottomStatus {
    pub fn new(link: LinkState, signal: SignalStrength, time: ClockTime) -> Self {
        Self {
            link,
            signal,
            clock: format_clock(time),
        }
    }
}

/// Format local time as `Www h:mm:ss` on a 12-hour clock
pub fn format_clock(time: ClockTime) -> String<CLOCK_TEXT_CAPACITY> {
    let weekday = WEEKDAYS.get(usize::from(time.weekday)).copied().unwrap_or("???");
    let hour = match time.hour % 12 {
        0 => 12,
        h => h,
    };

    let mut out = String::new();
    // Longest output is 12 bytes
    let _ = write!(out, "{} {}:{:02}:{:02}", weekday, hour, time.minute, time.second);
    out
}
