//! Parser configuration.
//!
//! Plain builder-style structs for library usage. Nothing is read from files
//! or the environment.
//!
//! # Example
//!
//! ```rust
//! use dhtparse::config::{ChannelSelection, ParseConfig};
//! use dhtparse::parser::DhtParser;
//!
//! let config = ParseConfig::new().with_channel_selection(ChannelSelection::First);
//! let parser = DhtParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Which channel of the dump's `data` section to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelSelection {
    /// `data` must hold exactly one channel; anything else is a schema error.
    #[default]
    Single,
    /// Take the first channel in document order and ignore the rest.
    First,
}

/// Configuration for dump parsing.
///
/// # Example
///
/// ```rust
/// use dhtparse::config::{ChannelSelection, ParseConfig};
///
/// let config = ParseConfig::default();
/// assert_eq!(config.channel_selection, ChannelSelection::Single);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseConfig {
    /// How to pick the channel out of `data` (default: `Single`)
    #[serde(default)]
    pub channel_selection: ChannelSelection,
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the channel selection policy.
    #[must_use]
    pub fn with_channel_selection(mut self, selection: ChannelSelection) -> Self {
        self.channel_selection = selection;
        self
    }
}
