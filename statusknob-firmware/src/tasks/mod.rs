//! Cooperative tasks
//!
//! Each task owns its peripheral and shares [`AppContext`] with the
//! others. Work is handed to the remote worker only through the bridge,
//! which the [`heartbeat`] keeps alive.
//!
//! [`AppContext`]: crate::context::AppContext

pub mod clock_sync;
pub mod display;
pub mod gesture;
pub mod heartbeat;
pub mod network;
pub mod telemetry;

pub use clock_sync::ClockSyncTask;
pub use display::DisplayTask;
pub use gesture::GestureTask;
pub use heartbeat::{heartbeat, HEARTBEAT_INTERVAL_MS};
pub use network::NetworkTask;
pub use telemetry::TelemetryTask;
