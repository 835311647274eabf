//! Remote status service trait
//!
//! Both calls block. They are only ever made from the remote worker thread.

use core::fmt::Write;

use heapless::String;

use crate::state::TopStatus;
use crate::status::{truncated, OutboundStatus, EMOJI_CAPACITY, STATUS_CAPACITY};

/// Capacity of error text carried by [`RemoteError`]
pub const ERROR_TEXT_CAPACITY: usize = 64;

/// Capacity of the profile display name
pub const DISPLAY_NAME_CAPACITY: usize = 64;

/// Remote call failure
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteError {
    /// Non-success HTTP status
    Http(u16),
    /// The service answered with an error
    Api(String<ERROR_TEXT_CAPACITY>),
    /// Connection or decoding failure
    Transport(String<ERROR_TEXT_CAPACITY>),
}

impl RemoteError {
    pub fn api(text: &str) -> Self {
        RemoteError::Api(truncated(text))
    }

    pub fn transport(text: &str) -> Self {
        RemoteError::Transport(truncated(text))
    }

    /// Top line shown for this failure
    pub fn to_top_status(&self) -> TopStatus {
        match self {
            RemoteError::Http(code) => {
                let mut text: String<16> = String::new();
                let _ = write!(text, "HTTP[{}]", code);
                TopStatus::message(&text)
            }
            RemoteError::Api(text) | RemoteError::Transport(text) => TopStatus::message(text),
        }
    }
}

impl core::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RemoteError::Http(code) => write!(f, "HTTP[{}]", code),
            RemoteError::Api(text) => write!(f, "api error: {}", text),
            RemoteError::Transport(text) => write!(f, "transport error: {}", text),
        }
    }
}

/// The user's current status as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RemoteProfile {
    pub display_name: String<DISPLAY_NAME_CAPACITY>,
    pub status_text: String<STATUS_CAPACITY>,
    pub status_emoji: String<EMOJI_CAPACITY>,
}

impl RemoteProfile {
    pub fn new(display_name: &str, status_text: &str, status_emoji: &str) -> Self {
        Self {
            display_name: truncated(display_name),
            status_text: truncated(status_text),
            status_emoji: truncated(status_emoji),
        }
    }

    /// Top line: first word of the display name and the status text
    pub fn to_top_status(&self) -> TopStatus {
        let first_name = self.display_name.split_whitespace().next().unwrap_or("");
        let status = Some(self.status_text.as_str()).filter(|s| !s.trim().is_empty());
        TopStatus::new(first_name, status)
    }
}

/// Remote status service client
pub trait RemoteStatusClient {
    /// Fetch the user's current status
    fn fetch_current_status(&mut self) -> Result<RemoteProfile, RemoteError>;

    /// Set the user's status
    fn send_status(&mut self, status: &OutboundStatus) -> Result<(), RemoteError>;
}

impl<T: RemoteStatusClient + ?Sized> RemoteStatusClient for &mut T {
    fn fetch_current_status(&mut self) -> Result<RemoteProfile, RemoteError> {
        (**self).fetch_current_status()
    }

    fn send_status(&mut self, status: &OutboundStatus) -> Result<(), RemoteError> {
        (**self).send_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_top_line_uses_first_name() {
        let profile = RemoteProfile::new("Ada Lovelace", "Computing", ":abacus:");
        let top = profile.to_top_status();
        assert_eq!(top.name(), "Ada");
        assert_eq!(top.status(), Some("Computing"));
    }

    #[test]
    fn test_profile_without_status() {
        let profile = RemoteProfile::new("Ada", "", "");
        assert_eq!(profile.to_top_status().status(), None);
    }

    #[test]
    fn test_error_top_lines() {
        assert_eq!(RemoteError::Http(429).to_top_status().name(), "HTTP[429]");
        assert_eq!(
            RemoteError::api("invalid_auth").to_top_status().name(),
            "invalid_auth"
        );
        assert_eq!(
            RemoteError::transport("connection reset").to_top_status().name(),
            "connection reset"
        );
    }
}
