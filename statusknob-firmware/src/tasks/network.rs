//! Network task
//!
//! Polls the link once a second, refreshes the bottom status line and
//! tells the remote worker whether the pipeline may run.

use log::{info, warn};
use statusknob_core::state::{BottomStatus, LinkState};
use statusknob_core::traits::{LinkStatus, NetworkLink};
use statusknob_hal::WallClock;

use crate::context::AppContext;
use crate::scheduler::{CooperativeTask, TaskError};

/// Link poll cadence
pub const NETWORK_INTERVAL_MS: u32 = 1000;

pub struct NetworkTask<N, W> {
    link: N,
    wall: W,
}

impl<N: NetworkLink, W: WallClock> NetworkTask<N, W> {
    pub fn new(link: N, wall: W) -> Self {
        Self { link, wall }
    }
}

impl<N: NetworkLink, W: WallClock> CooperativeTask for NetworkTask<N, W> {
    fn name(&self) -> &'static str {
        "Network"
    }

    fn poll(&mut self, ctx: &mut AppContext, _now_ms: u32) -> Result<(), TaskError> {
        let status = match self.link.status() {
            Ok(status) => status,
            Err(e) => {
                warn!("Link query failed: {}", e);
                LinkStatus {
                    state: LinkState::Error,
                    ..LinkStatus::default()
                }
            }
        };

        if status.state != ctx.link.state {
            info!("Link {:?} -> {:?}", ctx.link.state, status.state);
            if let Some([a, b, c, d]) = status.address {
                info!("Address {}.{}.{}.{} on {}", a, b, c, d, status.ssid);
            }
        }

        ctx.ui.set_bottom_status(BottomStatus::new(
            status.state,
            status.signal(),
            self.wall.local_time(),
        ));
        ctx.bridge.set_remote_enabled(status.is_connected());
        ctx.link = status;
        Ok(())
    }

    fn next_delay_ms(&self, _ctx: &AppContext) -> u32 {
        NETWORK_INTERVAL_MS
    }
}
