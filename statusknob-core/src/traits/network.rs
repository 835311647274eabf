//! Network link and clock synchronisation traits

use heapless::String;

use crate::state::{LinkState, SignalStrength};

/// Capacity of the network name
pub const SSID_CAPACITY: usize = 32;

/// Link query failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Interface driver reported an error
    Driver,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinkError::Driver => write!(f, "network driver error"),
        }
    }
}

/// Clock synchronisation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeSyncError {
    /// No answer from the time server
    Timeout,
    /// Answer could not be used
    InvalidResponse,
}

impl core::fmt::Display for TimeSyncError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimeSyncError::Timeout => write!(f, "time server timeout"),
            TimeSyncError::InvalidResponse => write!(f, "invalid time server response"),
        }
    }
}

/// Snapshot of the network interface
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    pub state: LinkState,
    /// Received signal strength in dBm, meaningful only when connected
    pub rssi_dbm: i8,
    pub ssid: String<SSID_CAPACITY>,
    pub address: Option<[u8; 4]>,
}

impl LinkStatus {
    /// Signal bucket; links that are not connected report strong
    pub fn signal(&self) -> SignalStrength {
        if self.state.is_connected() {
            SignalStrength::from_rssi(self.rssi_dbm)
        } else {
            SignalStrength::Strong
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state.is_connected()
    }
}

/// Network interface
pub trait NetworkLink {
    /// Current link state
    fn status(&mut self) -> Result<LinkStatus, LinkError>;
}

/// Wall-clock synchronisation
pub trait TimeSync {
    /// Set the wall clock from a network time source
    fn sync(&mut self) -> Result<(), TimeSyncError>;
}
