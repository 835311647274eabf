//! Rotary encoder abstraction
//!
//! The encoder driver owns the quadrature decoding and exposes an absolute
//! position counter. Consumers register a listener that is notified on every
//! position change, typically from interrupt context.

/// Receiver of rotary position change notifications
///
/// Implementations must be callable from interrupt context: no blocking,
/// no allocation.
pub trait RotaryListener: Sync {
    /// Called with the new absolute position after every change
    fn on_change(&self, position: i32);
}

/// Rotary encoder position source
pub trait RotaryEncoder {
    /// Current absolute position
    fn position(&self) -> i32;

    /// Register the listener notified on every position change
    ///
    /// Replaces any previously registered listener.
    fn set_listener(&mut self, listener: &'static dyn RotaryListener);
}
