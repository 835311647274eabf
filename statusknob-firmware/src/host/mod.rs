//! Host implementations of the board collaborators
//!
//! Lets the appliance run on a desktop: wall time and blocking delays from
//! the operating system, a knob typed on stdin, a log-backed renderer, a
//! link that is always up and a remote service that echoes back whatever
//! was last sent to it.

pub mod clock;
pub mod collaborators;
pub mod console;

pub use clock::{utc_time, NoDelay, StdDelay, SystemClock};
pub use collaborators::{AlwaysConnected, HostTimeSync, LogRenderer, LoopbackRemote, ManualEncoder};
pub use console::{ConsoleButton, ConsoleKnob};
