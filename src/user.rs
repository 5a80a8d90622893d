//! Channel participants.

use std::fmt;

/// A user from the dump's user registry.
///
/// Users are created once by the parser and shared by reference between the
/// channel's user list and every message they authored.
///
/// # Example
///
/// ```
/// use dhtparse::User;
///
/// let user = User::new(140000000000000001, "Jane Doe");
/// assert_eq!(user.short_name(), "Jane");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: u64,
    name: String,
    short_name: String,
}

impl User {
    /// Creates a user and derives its short name.
    ///
    /// The short name is the part of `name` before the first space or
    /// hyphen, or the whole name when it has neither.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        let short_name = name
            .split([' ', '-'])
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            id,
            name,
            short_name,
        }
    }

    /// Returns the user's snowflake id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the name truncated at the first space or hyphen.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_space() {
        assert_eq!(User::new(1, "Jane Doe").short_name(), "Jane");
    }

    #[test]
    fn test_short_name_hyphen() {
        assert_eq!(User::new(1, "Anne-Marie").short_name(), "Anne");
    }

    #[test]
    fn test_short_name_single_word() {
        assert_eq!(User::new(1, "Solo").short_name(), "Solo");
    }

    #[test]
    fn test_short_name_first_separator_wins() {
        assert_eq!(User::new(1, "Mary-Kate Olsen").short_name(), "Mary");
        assert_eq!(User::new(1, "Jean Paul-Smith").short_name(), "Jean");
    }

    #[test]
    fn test_short_name_leading_separator() {
        assert_eq!(User::new(1, " padded").short_name(), "");
        assert_eq!(User::new(1, "").short_name(), "");
    }

    #[test]
    fn test_accessors_and_display() {
        let user = User::new(42, "Alice Smith");
        assert_eq!(user.id(), 42);
        assert_eq!(user.name(), "Alice Smith");
        assert_eq!(user.to_string(), "Alice Smith");
    }
}
