//! Parser entry points for channel dumps.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> dhtparse::Result<()> {
//! use dhtparse::parser::{DhtParser, Parser};
//! use std::path::Path;
//!
//! let channel = DhtParser::new().parse(Path::new("dht.txt"))?;
//! for msg in channel.messages() {
//!     let author = msg.user().map_or("<unknown>", |u| u.name());
//!     println!("{} {}: {}", msg.time(), author, msg.text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Or with the convenience function:
//!
//! ```rust,no_run
//! # fn main() -> dhtparse::Result<()> {
//! let channel = dhtparse::parse("dht.txt")?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::channel::index_users;
use crate::config::{ChannelSelection, ParseConfig};
use crate::core::MessageCollection;
use crate::error::{DhtError, Result};
use crate::parsing::{DhtDump, DhtRawMessage, Entries, UserIndex, millis_to_local, parse_snowflake};
use crate::{Channel, Message, User};

/// Trait for turning a dump into a [`Channel`].
///
/// Implementors must provide [`name`](Parser::name),
/// [`parse_str`](Parser::parse_str) and [`parse_value`](Parser::parse_value);
/// the reader and file entry points read the whole source into memory and
/// delegate to `parse_str`.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses a dump from a string.
    fn parse_str(&self, content: &str) -> Result<Channel>;

    /// Builds a channel from an already decoded JSON document.
    fn parse_value(&self, value: serde_json::Value) -> Result<Channel>;

    /// Parses a dump from any reader. The reader is drained before parsing.
    fn parse_reader(&self, reader: &mut dyn Read) -> Result<Channel> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        self.parse_str(&content)
    }

    /// Parses a dump file.
    ///
    /// Schema errors carry the file path.
    fn parse(&self, path: &Path) -> Result<Channel> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Parses a dump file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Channel> {
        self.parse(Path::new(path))
    }
}

/// Parser for Discord History Tracker channel dumps.
#[derive(Debug, Clone, Default)]
pub struct DhtParser {
    config: ParseConfig,
}

impl DhtParser {
    /// Creates a parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    fn select_channel(
        &self,
        data: Entries<Entries<DhtRawMessage>>,
    ) -> Result<(String, Entries<DhtRawMessage>)> {
        let count = data.len();
        match (self.config.channel_selection, count) {
            (_, 0) => Err(DhtError::schema("data contains no channel")),
            (ChannelSelection::Single, n) if n > 1 => Err(DhtError::schema(format!(
                "data contains {n} channels, expected exactly one"
            ))),
            _ => {
                if count > 1 {
                    debug!(channels = count, "taking first channel of multi-channel dump");
                }
                data.0
                    .into_iter()
                    .next()
                    .ok_or_else(|| DhtError::schema("data contains no channel"))
            }
        }
    }

    fn build_channel(&self, dump: DhtDump) -> Result<Channel> {
        let meta = dump.meta;

        let server = meta
            .servers
            .into_iter()
            .next()
            .ok_or_else(|| DhtError::schema("meta.servers is empty"))?;

        let users = meta
            .users
            .0
            .into_iter()
            .map(|(id, raw)| Ok(Arc::new(User::new(parse_snowflake(&id, "users")?, raw.name))))
            .collect::<Result<Vec<_>>>()?;
        let by_id = index_users(&users);

        let userindex = UserIndex::from_raw(meta.userindex)?;

        let (channel_key, records) = self.select_channel(dump.data)?;
        let channel_id = parse_snowflake(&channel_key, "data")?;

        let mut messages = Vec::with_capacity(records.len());
        let mut unresolved = 0usize;
        for (message_id, record) in records.0 {
            let time = millis_to_local(record.t)?;
            let user = userindex
                .lookup(&record.u)
                .and_then(|id| by_id.get(&id))
                .cloned();
            if user.is_none() {
                unresolved += 1;
                trace!(message_id = %message_id, key = ?record.u, "author not in user registry");
            }
            messages.push(Message::new(
                message_id,
                record.m.unwrap_or_default(),
                time,
                user,
            ));
        }

        if unresolved > 0 {
            warn!(channel_id, unresolved, "messages with unresolved authors");
        }

        messages.sort_by_key(Message::time);

        debug!(
            channel_id,
            users = users.len(),
            messages = messages.len(),
            "parsed channel dump"
        );

        Ok(Channel::new(
            channel_id,
            users,
            MessageCollection::from(messages),
            server.name,
            server.server_type,
        ))
    }
}

impl Parser for DhtParser {
    fn name(&self) -> &'static str {
        "Discord History Tracker"
    }

    fn parse_str(&self, content: &str) -> Result<Channel> {
        let dump: DhtDump = serde_json::from_str(content)?;
        self.build_channel(dump)
    }

    fn parse_value(&self, value: serde_json::Value) -> Result<Channel> {
        let dump: DhtDump = serde_json::from_value(value)?;
        self.build_channel(dump)
    }
}

/// Parses a dump file with the default configuration.
///
/// Equivalent to `DhtParser::new().parse(path)`.
pub fn parse(path: impl AsRef<Path>) -> Result<Channel> {
    DhtParser::new().parse(path.as_ref())
}
