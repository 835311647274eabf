//! Status presets and outbound updates

pub mod item;
pub mod outbound;

pub use item::{
    ItemField, StatusList, StatusListItem, DISPLAY_CAPACITY, EMOJI_CAPACITY, MAX_EXPIRY_MINUTES,
    MAX_STATUS_ITEMS, STATUS_CAPACITY,
};
pub use outbound::OutboundStatus;

use heapless::String;

/// Copy as much of `text` as fits, never splitting a character
pub fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
