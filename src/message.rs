//! Normalized chat message.
//!
//! A [`Message`] is built by the parser from one raw record of the dump's
//! `data` section. Its author is resolved through the `userindex` table and
//! stored as a shared reference into the channel's user registry.
//!
//! # Overview
//!
//! A message consists of:
//! - `id`: the dump's message key, kept as an opaque string
//! - `text`: the message body, empty for records without text
//! - `time`: local time the message was sent, millisecond precision
//! - `user`: the author, or `None` when it could not be resolved
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::{Local, TimeZone};
//! use dhtparse::{Message, User};
//!
//! let alice = Arc::new(User::new(1, "Alice"));
//! let time = Local.timestamp_millis_opt(1_700_000_000_000).unwrap();
//! let msg = Message::new("900", "Hello!", time, Some(alice));
//!
//! assert_eq!(msg.text(), "Hello!");
//! assert!(msg.is_resolved());
//! assert_eq!(msg.to_string(), "Hello!");
//! ```

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::User;

/// A single message from a channel dump.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `String` | Message key from the dump |
/// | `text` | `String` | Message body (empty for non-text records) |
/// | `time` | `DateTime<Local>` | When the message was sent |
/// | `user` | `Option<Arc<User>>` | Author, `None` if unresolved |
#[derive(Debug, Clone)]
pub struct Message {
    id: String,
    text: String,
    time: DateTime<Local>,
    user: Option<Arc<User>>,
}

impl Message {
    /// Creates a message with all fields specified.
    ///
    /// `user` is stored as given; pass `None` for an unresolved author.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        time: DateTime<Local>,
        user: Option<Arc<User>>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            time,
            user,
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the message key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the message key as a snowflake, if it is numeric.
    pub fn id_as_u64(&self) -> Option<u64> {
        self.id.parse().ok()
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the time the message was sent.
    pub fn time(&self) -> DateTime<Local> {
        self.time
    }

    /// Returns the author, if it was resolved.
    pub fn user(&self) -> Option<&Arc<User>> {
        self.user.as_ref()
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns `true` if the author was found in the channel's user registry.
    pub fn is_resolved(&self) -> bool {
        self.user.is_some()
    }

    /// Returns `true` if `user` is the very same user instance as the author.
    ///
    /// Field equality is not enough: the user must come from the same
    /// channel the message was parsed into.
    pub fn is_from(&self, user: &User) -> bool {
        self.user
            .as_deref()
            .is_some_and(|author| std::ptr::eq(author, user))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
