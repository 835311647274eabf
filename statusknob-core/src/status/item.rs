//! Configured status presets

use heapless::{String, Vec};

/// Maximum number of presets in the list
pub const MAX_STATUS_ITEMS: usize = 25;

/// Upper bound for a preset's expiry, in minutes
pub const MAX_EXPIRY_MINUTES: u16 = 240;

/// Capacity of the optional list label
pub const DISPLAY_CAPACITY: usize = 32;

/// Capacity of the status text sent to the remote service
pub const STATUS_CAPACITY: usize = 100;

/// Capacity of the emoji code
pub const EMOJI_CAPACITY: usize = 48;

/// Text field of a status preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemField {
    Display,
    Status,
    Emoji,
}

impl ItemField {
    /// Configuration key for this field
    pub fn key(&self) -> &'static str {
        match self {
            ItemField::Display => "display",
            ItemField::Status => "status",
            ItemField::Emoji => "emoji",
        }
    }
}

/// A status preset the user can pick from the list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusListItem {
    display: Option<String<DISPLAY_CAPACITY>>,
    status: String<STATUS_CAPACITY>,
    emoji: String<EMOJI_CAPACITY>,
    expiry_minutes: u16,
}

impl StatusListItem {
    /// Build a preset, clamping the expiry to `0..=240` minutes
    ///
    /// Fails with the first field that does not fit its capacity.
    pub fn new(
        display: Option<&str>,
        status: &str,
        emoji: &str,
        expiry_minutes: u16,
    ) -> Result<Self, ItemField> {
        let display = match display {
            Some(text) => Some(String::try_from(text).map_err(|_| ItemField::Display)?),
            None => None,
        };

        Ok(Self {
            display,
            status: String::try_from(status).map_err(|_| ItemField::Status)?,
            emoji: String::try_from(emoji).map_err(|_| ItemField::Emoji)?,
            expiry_minutes: expiry_minutes.min(MAX_EXPIRY_MINUTES),
        })
    }

    /// Label shown in the list, falling back to the status text
    pub fn display_text(&self) -> &str {
        match &self.display {
            Some(display) => display.as_str(),
            None => self.status.as_str(),
        }
    }

    pub fn status(&self) -> &str {
        self.status.as_str()
    }

    pub fn emoji(&self) -> &str {
        self.emoji.as_str()
    }

    pub fn expiry_minutes(&self) -> u16 {
        self.expiry_minutes
    }

    /// Move the expiry by `delta` minutes, clamped to `0..=240`
    ///
    /// Returns the new expiry.
    pub fn adjust_expiry(&mut self, delta: i32) -> u16 {
        let next = (i32::from(self.expiry_minutes) + delta).clamp(0, i32::from(MAX_EXPIRY_MINUTES));
        // Clamped into u16 range above
        self.expiry_minutes = next as u16;
        self.expiry_minutes
    }
}

/// Ordered list of status presets
///
/// Holds between 1 and [`MAX_STATUS_ITEMS`] entries once loaded from
/// configuration; the UI relies on it never being empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusList {
    items: Vec<StatusListItem, MAX_STATUS_ITEMS>,
}

impl StatusList {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a preset, handing it back when the list is full
    pub fn push(&mut self, item: StatusListItem) -> Result<(), StatusListItem> {
        self.items.push(item)
    }

    pub fn get(&self, index: usize) -> Option<&StatusListItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StatusListItem> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusListItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_falls_back_to_status() {
        let item = StatusListItem::new(None, "In a meeting", ":calendar:", 30).unwrap();
        assert_eq!(item.display_text(), "In a meeting");

        let item = StatusListItem::new(Some("Meeting"), "In a meeting", ":calendar:", 30).unwrap();
        assert_eq!(item.display_text(), "Meeting");
        assert_eq!(item.status(), "In a meeting");
    }

    #[test]
    fn test_expiry_clamped_on_construction() {
        let item = StatusListItem::new(None, "Lunch", ":pizza:", 1000).unwrap();
        assert_eq!(item.expiry_minutes(), MAX_EXPIRY_MINUTES);
    }

    #[test]
    fn test_adjust_expiry_clamps_both_ends() {
        let mut item = StatusListItem::new(None, "Lunch", ":pizza:", 1).unwrap();
        assert_eq!(item.adjust_expiry(-1), 0);
        assert_eq!(item.adjust_expiry(-1), 0);

        let mut item = StatusListItem::new(None, "Lunch", ":pizza:", 239).unwrap();
        assert_eq!(item.adjust_expiry(1), 240);
        assert_eq!(item.adjust_expiry(1), 240);
    }

    #[test]
    fn test_oversized_field_is_reported() {
        let long = "x".repeat(DISPLAY_CAPACITY + 1);
        assert_eq!(
            StatusListItem::new(Some(&long), "ok", ":ok:", 0),
            Err(ItemField::Display)
        );
    }

    #[test]
    fn test_list_capacity() {
        let mut list = StatusList::new();
        let item = StatusListItem::new(None, "Away", ":away:", 0).unwrap();
        for _ in 0..MAX_STATUS_ITEMS {
            assert!(list.push(item.clone()).is_ok());
        }
        assert!(list.push(item).is_err());
        assert_eq!(list.len(), MAX_STATUS_ITEMS);
    }
}
