//! Status update sent to the remote service

use heapless::String;
use statusknob_hal::WallClock;

use super::item::{StatusListItem, EMOJI_CAPACITY, STATUS_CAPACITY};

/// A committed selection waiting to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutboundStatus {
    pub text: String<STATUS_CAPACITY>,
    pub emoji: String<EMOJI_CAPACITY>,
    /// Unix seconds at which the status clears, 0 for never
    pub expiry_epoch: u64,
}

impl OutboundStatus {
    /// Build the update for a preset at the current wall-clock time
    pub fn from_item<W: WallClock + ?Sized>(item: &StatusListItem, clock: &W) -> Self {
        let minutes = u64::from(item.expiry_minutes());
        let expiry_epoch = if minutes == 0 {
            0
        } else {
            clock.unix_seconds() + minutes * 60
        };

        Self {
            // Same capacities as the item, cannot overflow
            text: String::try_from(item.status()).unwrap_or_default(),
            emoji: String::try_from(item.emoji()).unwrap_or_default(),
            expiry_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statusknob_hal::ClockTime;

    struct BoardClock;

    impl WallClock for BoardClock {
        fn platform_seconds(&self) -> u64 {
            1_000
        }

        fn local_time(&self) -> ClockTime {
            ClockTime {
                weekday: 1,
                hour: 9,
                minute: 0,
                second: 0,
            }
        }
    }

    #[test]
    fn test_zero_expiry_never_clears() {
        let item = StatusListItem::new(None, "Focus", ":headphones:", 0).unwrap();
        let out = OutboundStatus::from_item(&item, &BoardClock);
        assert_eq!(out.expiry_epoch, 0);
        assert_eq!(out.text.as_str(), "Focus");
        assert_eq!(out.emoji.as_str(), ":headphones:");
    }

    #[test]
    fn test_expiry_uses_unix_epoch() {
        let item = StatusListItem::new(Some("Lunch"), "Out to lunch", ":pizza:", 30).unwrap();
        let out = OutboundStatus::from_item(&item, &BoardClock);
        assert_eq!(out.expiry_epoch, 946_684_800 + 1_000 + 30 * 60);
        assert_eq!(out.text.as_str(), "Out to lunch");
    }
}
