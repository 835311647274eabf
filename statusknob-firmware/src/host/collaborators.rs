//! Stand-ins for board peripherals when running on a desktop

use log::{debug, info};
use statusknob_core::state::{DisplayMode, LinkState};
use statusknob_core::status::OutboundStatus;
use statusknob_core::traits::{
    Frame, LinkError, LinkStatus, NetworkLink, RemoteError, RemoteProfile, RemoteStatusClient,
    RenderError, Renderer, TimeSync, TimeSyncError,
};
use statusknob_hal::{RotaryEncoder, RotaryListener};

/// Renderer that writes each repainted region to the log
#[derive(Debug, Default)]
pub struct LogRenderer;

impl LogRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), RenderError> {
        let ui = frame.ui;

        if frame.regions.top {
            let top = ui.top_status();
            info!("[top] {} {}", top.name(), top.status().unwrap_or(""));
        }

        if frame.regions.body {
            match ui.mode() {
                DisplayMode::Main => {
                    for (index, item) in ui.visible(frame.list) {
                        let marker = if index == ui.selected_index() { ">" } else { " " };
                        info!("[list] {} {} {}", marker, item.emoji(), item.display_text());
                    }
                }
                DisplayMode::ExpirySelect => {
                    if let Some(item) = frame.list.get(ui.selected_index()) {
                        info!(
                            "[expiry] {} for {} minutes",
                            item.display_text(),
                            item.expiry_minutes()
                        );
                    }
                }
                DisplayMode::WifiInfo => {
                    let link = frame.link;
                    info!(
                        "[wifi] ssid={} state={:?} rssi={}dBm address={:?}",
                        link.ssid, link.state, link.rssi_dbm, link.address
                    );
                }
            }
        }

        if frame.regions.bottom {
            let bottom = ui.bottom_status();
            info!("[bottom] {:?} {:?} {}", bottom.link, bottom.signal, bottom.clock);
        }
        Ok(())
    }

    fn set_sleep(&mut self, asleep: bool) -> Result<(), RenderError> {
        debug!("panel {}", if asleep { "blanked" } else { "restored" });
        Ok(())
    }
}

/// Network link that is always up
#[derive(Debug, Clone)]
pub struct AlwaysConnected {
    status: LinkStatus,
}

impl AlwaysConnected {
    pub fn new(ssid: &str) -> Self {
        Self {
            status: LinkStatus {
                state: LinkState::Connected,
                rssi_dbm: -55,
                ssid: statusknob_core::status::truncated(ssid),
                address: Some([127, 0, 0, 1]),
            },
        }
    }
}

impl NetworkLink for AlwaysConnected {
    fn status(&mut self) -> Result<LinkStatus, LinkError> {
        Ok(self.status.clone())
    }
}

/// Encoder turned by hand from code
#[derive(Default)]
pub struct ManualEncoder {
    position: i32,
    listener: Option<&'static dyn RotaryListener>,
}

impl ManualEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by `steps` detents, notifying the listener once per detent
    pub fn turn(&mut self, steps: i32) {
        for _ in 0..steps.unsigned_abs() {
            self.position += steps.signum();
            if let Some(listener) = self.listener {
                listener.on_change(self.position);
            }
        }
    }
}

impl RotaryEncoder for ManualEncoder {
    fn position(&self) -> i32 {
        self.position
    }

    fn set_listener(&mut self, listener: &'static dyn RotaryListener) {
        self.listener = Some(listener);
    }
}

/// Remote service that echoes back the last status sent to it
#[derive(Debug, Clone)]
pub struct LoopbackRemote {
    profile: RemoteProfile,
}

impl LoopbackRemote {
    pub fn new(display_name: &str) -> Self {
        Self {
            profile: RemoteProfile::new(display_name, "", ""),
        }
    }
}

impl RemoteStatusClient for LoopbackRemote {
    fn fetch_current_status(&mut self) -> Result<RemoteProfile, RemoteError> {
        Ok(self.profile.clone())
    }

    fn send_status(&mut self, status: &OutboundStatus) -> Result<(), RemoteError> {
        self.profile.status_text = status.text.clone();
        self.profile.status_emoji = status.emoji.clone();
        Ok(())
    }
}

/// Time sync that trusts the host clock
#[derive(Debug, Clone, Copy, Default)]
pub struct HostTimeSync;

impl TimeSync for HostTimeSync {
    fn sync(&mut self) -> Result<(), TimeSyncError> {
        Ok(())
    }
}
