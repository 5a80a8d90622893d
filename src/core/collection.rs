//! Ordered message container with non-mutating queries.
//!
//! [`MessageCollection`] wraps the time-sorted messages of a channel. Every
//! query scans the collection once and returns a new collection holding the
//! matches in their original relative order. The receiver is never changed.
//!
//! # Queries
//!
//! | Query | Method | Description |
//! |-------|--------|-------------|
//! | Author | [`messages_from`](MessageCollection::messages_from) | Sent by the given user instance |
//! | Day | [`messages_on`](MessageCollection::messages_on) | Sent on a local calendar date |
//! | Range | [`messages_between`](MessageCollection::messages_between) | Sent in `[from, to)` |
//! | Substring | [`messages_with`](MessageCollection::messages_with) | Text contains a substring |
//! | Exact | [`messages_with_only`](MessageCollection::messages_with_only) | Text equals a string |
//!
//! # Example
//!
//! ```
//! use chrono::{Local, TimeZone};
//! use dhtparse::{Message, MessageCollection};
//!
//! let at = |ms| Local.timestamp_millis_opt(ms).unwrap();
//! let messages: MessageCollection = vec![
//!     Message::new("1", "say hello now", at(1_000), None),
//!     Message::new("2", "bye", at(2_000), None),
//! ]
//! .into();
//!
//! let hits = messages.messages_with("HELLO", false);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id(), "1");
//! ```

use std::ops::Index;
use std::slice;

use chrono::{DateTime, NaiveDate, TimeZone};

use super::filter::TextMatch;
use crate::{Message, User};

/// An ordered, read-only sequence of messages.
#[derive(Debug, Clone, Default)]
pub struct MessageCollection {
    messages: Vec<Message>,
}

impl MessageCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this collection stably sorted by send time.
    ///
    /// Messages with equal timestamps keep their relative order.
    #[must_use]
    pub fn sorted_by_time(&self) -> Self {
        let mut messages = self.messages.clone();
        messages.sort_by_key(Message::time);
        Self { messages }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Messages whose author is the given user instance.
    ///
    /// Matching is by identity. `user` must be obtained from the same
    /// [`Channel`](crate::Channel); an equal but separately constructed
    /// [`User`] matches nothing. Unresolved messages never match.
    pub fn messages_from(&self, user: &User) -> Self {
        self.select(|msg| msg.is_from(user))
    }

    /// Messages sent on `date`, compared in local time.
    pub fn messages_on(&self, date: NaiveDate) -> Self {
        self.select(|msg| msg.time().date_naive() == date)
    }

    /// Messages sent in the half-open interval `[from, to)`.
    ///
    /// A message exactly at `from` is included, one exactly at `to` is not.
    /// If `from >= to` the result is empty.
    pub fn messages_between<Tz: TimeZone>(&self, from: &DateTime<Tz>, to: &DateTime<Tz>) -> Self {
        self.select(|msg| {
            let time = msg.time();
            *from <= time && time < *to
        })
    }

    /// Messages whose text contains `substring`.
    ///
    /// With `case_sensitive == false` both sides are lowercased first and an
    /// empty substring matches every message. With `case_sensitive == true`
    /// the substring must occur verbatim and an empty substring matches
    /// nothing.
    pub fn messages_with(&self, substring: &str, case_sensitive: bool) -> Self {
        let matcher = TextMatch::contains(substring).case_sensitive(case_sensitive);
        self.select(|msg| matcher.matches(msg.text()))
    }

    /// Messages whose entire text equals `text`.
    pub fn messages_with_only(&self, text: &str, case_sensitive: bool) -> Self {
        let matcher = TextMatch::exact(text).case_sensitive(case_sensitive);
        self.select(|msg| matcher.matches(msg.text()))
    }

    fn select(&self, predicate: impl Fn(&Message) -> bool) -> Self {
        self.messages
            .iter()
            .filter(|msg| predicate(*msg))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Read-only access
    // =========================================================================

    /// Returns the number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if the collection holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns an iterator over the messages in order.
    pub fn iter(&self) -> slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns the message at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    /// Returns the earliest message.
    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    /// Returns the latest message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the messages as a slice.
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl From<Vec<Message>> for MessageCollection {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for MessageCollection {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for MessageCollection {
    type Output = Message;

    fn index(&self, index: usize) -> &Message {
        &self.messages[index]
    }
}

impl<'a> IntoIterator for &'a MessageCollection {
    type Item = &'a Message;
    type IntoIter = slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl IntoIterator for MessageCollection {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}
