//! Time-based pacing
//!
//! Every periodic activity in the appliance is paced by an
//! [`IntervalGate`] owned by the activity itself.

pub mod interval;

pub use interval::IntervalGate;

/// Milliseconds elapsed from `earlier` to `now` on a wrapping `u32` clock
#[inline]
pub fn elapsed_ms(now_ms: u32, earlier_ms: u32) -> u32 {
    now_ms.wrapping_sub(earlier_ms)
}
