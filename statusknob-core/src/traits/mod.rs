//! Collaborator traits
//!
//! These traits define the interface between the event core and the
//! renderer, the network stack and the remote status service.

pub mod display;
pub mod network;
pub mod remote;

pub use display::{Frame, RenderError, Renderer};
pub use network::{LinkError, LinkStatus, NetworkLink, TimeSync, TimeSyncError, SSID_CAPACITY};
pub use remote::{RemoteError, RemoteProfile, RemoteStatusClient};
