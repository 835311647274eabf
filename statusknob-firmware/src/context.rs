//! State shared by the cooperative tasks
//!
//! Lives on the executor thread and is handed to each task on every poll.
//! Only the [`Bridge`] is visible to the remote worker.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use statusknob_core::bridge::Bridge;
use statusknob_core::config::RuntimeTuning;
use statusknob_core::state::UiState;
use statusknob_core::status::StatusList;
use statusknob_core::traits::LinkStatus;

pub struct AppContext {
    pub ui: UiState,
    pub statuses: StatusList,
    /// Last link snapshot from the network task
    pub link: LinkStatus,
    pub bridge: &'static Bridge,
    /// Clock reading at startup, for uptime
    pub boot_ms: u32,
}

impl AppContext {
    pub fn new(
        statuses: StatusList,
        bridge: &'static Bridge,
        runtime: &RuntimeTuning,
        now_ms: u32,
    ) -> Self {
        Self {
            ui: UiState::new(runtime.screen_off_ms(), now_ms),
            statuses,
            link: LinkStatus::default(),
            bridge,
            boot_ms: now_ms,
        }
    }
}

/// [`AppContext`] shared by all tasks on the executor thread
///
/// Tasks hold the lock for exactly one poll.
pub type SharedContext = Mutex<CriticalSectionRawMutex, RefCell<AppContext>>;

impl AppContext {
    pub fn into_shared(self) -> SharedContext {
        Mutex::new(RefCell::new(self))
    }
}
