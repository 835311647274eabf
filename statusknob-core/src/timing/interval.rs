//! Interval gate
//!
//! A stateful rate limiter answering "may this periodic action fire now".
//! The gate records the reading at which it last fired and opens again once
//! the configured interval has elapsed.
//!
//! The monotonic counter wraps. A reading lower than the recorded one is
//! treated as a rollover and opens the gate immediately: firing slightly
//! early once per wrap is preferred over stalling for a full counter period.

/// Rate limiter for periodic actions
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IntervalGate {
    /// Minimum time between fires
    interval_ms: u32,
    /// Disabled gates never open
    enabled: bool,
    /// Reading at the last fire; `None` forces the next check to fire
    last_fire_ms: Option<u32>,
}

impl IntervalGate {
    /// Create an enabled gate that fires on its first check
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            enabled: true,
            last_fire_ms: None,
        }
    }

    /// Create a gate that stays closed until enabled
    pub const fn disabled(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            enabled: false,
            last_fire_ms: None,
        }
    }

    /// Check whether the interval has passed at `now_ms`
    ///
    /// Returns `true` and records `now_ms` when the gate opens. A disabled
    /// gate always returns `false` and leaves its state untouched.
    pub fn has_passed(&mut self, now_ms: u32) -> bool {
        if !self.enabled {
            return false;
        }

        let open = match self.last_fire_ms {
            None => true,
            // Counter rolled over since the last fire
            Some(last) if now_ms < last => true,
            Some(last) => u64::from(now_ms) >= u64::from(last) + u64::from(self.interval_ms),
        };

        if open {
            self.last_fire_ms = Some(now_ms);
        }
        open
    }

    /// Force the next [`IntervalGate::has_passed`] to fire
    pub fn reset(&mut self) {
        self.last_fire_ms = None;
    }

    /// Enable or disable the gate
    ///
    /// When the flag actually changes and `should_reset` is set, the gate is
    /// also reset so it fires on the next check. Setting the current value
    /// again never resets.
    ///
    /// Returns whether the flag changed, not the new value, so callers can
    /// log transitions exactly once.
    pub fn enable(&mut self, enabled: bool, should_reset: bool) -> bool {
        let changed = self.enabled != enabled;
        self.enabled = enabled;
        if changed && should_reset {
            self.last_fire_ms = None;
        }
        changed
    }

    /// Check if the gate is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Configured interval
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}
