//! A parsed channel: metadata, user registry and time-sorted messages.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::core::{MessageCollection, TextMatch};
use crate::User;

/// A single channel or DM reconstructed from a dump.
///
/// Channels are built once by the parser and never change afterwards.
/// Queries on [`messages`](Channel::messages) produce new collections.
///
/// # Example
///
/// ```
/// # fn main() -> dhtparse::Result<()> {
/// use dhtparse::parser::{DhtParser, Parser};
///
/// let dump = r#"{
///   "meta": {
///     "users": {"101": {"name": "Jane Doe"}},
///     "userindex": ["101"],
///     "servers": [{"name": "Jane", "type": "DM"}]
///   },
///   "data": {"555": {"9001": {"u": 0, "t": 1700000000000, "m": "hi"}}}
/// }"#;
///
/// let channel = DhtParser::new().parse_str(dump)?;
/// assert_eq!(channel.id(), 555);
///
/// let jane = channel.find_user_by_id(101).unwrap();
/// assert_eq!(channel.messages().messages_from(&jane).len(), 1);
/// # Ok(())
/// # }
/// ```
///
/// Only the parser builds channels:
///
/// ```compile_fail
/// use dhtparse::{Channel, MessageCollection};
///
/// let channel = Channel::new(1, Vec::new(), MessageCollection::new(), "x", "DM");
/// ```
#[derive(Debug, Clone)]
pub struct Channel {
    id: u64,
    users: Vec<Arc<User>>,
    users_by_id: HashMap<u64, Arc<User>>,
    messages: MessageCollection,
    name: String,
    channel_type: String,
}

impl Channel {
    /// Assembles a channel.
    ///
    /// `users` keeps its order. If two users share an id, the earlier one
    /// wins in [`find_user_by_id`](Self::find_user_by_id). Every resolved
    /// message author must come from `users`.
    pub(crate) fn new(
        id: u64,
        users: Vec<Arc<User>>,
        messages: MessageCollection,
        name: impl Into<String>,
        channel_type: impl Into<String>,
    ) -> Self {
        let users_by_id = index_users(&users);
        Self {
            id,
            users,
            users_by_id,
            messages,
            name: name.into(),
            channel_type: channel_type.into(),
        }
    }

    /// Returns the channel's snowflake id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the user registry in document order.
    ///
    /// May include users without messages, and may miss authors the export
    /// did not record.
    pub fn users(&self) -> &[Arc<User>] {
        &self.users
    }

    /// Returns the time-sorted messages.
    pub fn messages(&self) -> &MessageCollection {
        &self.messages
    }

    /// Returns the channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the channel type as recorded by the export (e.g. `DM`).
    pub fn channel_type(&self) -> &str {
        &self.channel_type
    }

    /// Finds users by display name.
    ///
    /// With `strict` the whole name must match, otherwise `name` may occur
    /// anywhere in it. Matching folds case unless `case_sensitive` is set.
    /// Results keep registry order.
    pub fn find_users(&self, name: &str, strict: bool, case_sensitive: bool) -> Vec<Arc<User>> {
        let matcher = TextMatch::from_strict(name, strict).case_sensitive(case_sensitive);
        self.users
            .iter()
            .filter(|user| matcher.matches(user.name()))
            .cloned()
            .collect()
    }

    /// Looks up a user by id.
    pub fn find_user_by_id(&self, id: u64) -> Option<Arc<User>> {
        self.users_by_id.get(&id).cloned()
    }
}

/// Maps user ids to registry entries. The first user with a given id wins.
pub(crate) fn index_users(users: &[Arc<User>]) -> HashMap<u64, Arc<User>> {
    let mut by_id = HashMap::with_capacity(users.len());
    for user in users {
        by_id.entry(user.id()).or_insert_with(|| Arc::clone(user));
    }
    by_id
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.channel_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Channel {
        let users = vec![
            Arc::new(User::new(1, "Jane Doe")),
            Arc::new(User::new(2, "jane")),
            Arc::new(User::new(3, "Bob-Jane")),
        ];
        Channel::new(99, users, MessageCollection::new(), "general", "SERVER")
    }

    fn names(users: &[Arc<User>]) -> Vec<&str> {
        users.iter().map(|u| u.name()).collect()
    }

    #[test]
    fn test_find_users_strict() {
        let channel = sample();
        assert_eq!(names(&channel.find_users("JANE", true, false)), ["jane"]);
        assert!(channel.find_users("Jane", true, true).is_empty());
        assert_eq!(names(&channel.find_users("jane", true, true)), ["jane"]);
    }

    #[test]
    fn test_find_users_substring() {
        let channel = sample();
        assert_eq!(
            names(&channel.find_users("jane", false, false)),
            ["Jane Doe", "jane", "Bob-Jane"]
        );
        assert_eq!(
            names(&channel.find_users("Jane", false, true)),
            ["Jane Doe", "Bob-Jane"]
        );
    }

    #[test]
    fn test_find_user_by_id() {
        let channel = sample();
        assert_eq!(channel.find_user_by_id(3).map(|u| u.id()), Some(3));
        assert!(channel.find_user_by_id(404).is_none());
    }

    #[test]
    fn test_find_user_by_id_shares_registry_instance() {
        let channel = sample();
        let found = channel.find_user_by_id(1).unwrap();
        assert!(Arc::ptr_eq(&found, &channel.users()[0]));
    }

    #[test]
    fn test_find_user_by_id_first_duplicate_wins() {
        let users = vec![
            Arc::new(User::new(7, "First")),
            Arc::new(User::new(7, "Second")),
        ];
        let channel = Channel::new(1, users, MessageCollection::new(), "dm", "DM");
        let found = channel.find_user_by_id(7).unwrap();
        assert_eq!(found.name(), "First");
        assert!(Arc::ptr_eq(&found, &channel.users()[0]));
        assert_eq!(channel.users().len(), 2);
    }

    #[test]
    fn test_accessors_and_display() {
        let channel = sample();
        assert_eq!(channel.id(), 99);
        assert_eq!(channel.name(), "general");
        assert_eq!(channel.channel_type(), "SERVER");
        assert_eq!(channel.users().len(), 3);
        assert!(channel.messages().is_empty());
        assert_eq!(channel.to_string(), "general (SERVER)");
    }
}
