//! Raw shapes of a Discord History Tracker dump and helpers to normalize them.
//!
//! A dump looks like this:
//!
//! ```json
//! {
//!   "meta": {
//!     "users": {"101": {"name": "Jane Doe"}},
//!     "userindex": ["101"],
//!     "servers": [{"name": "Jane Doe", "type": "DM"}]
//!   },
//!   "data": {
//!     "555": {
//!       "9001": {"u": 0, "t": 1700000000000, "m": "hello"}
//!     }
//!   }
//! }
//! ```
//!
//! JSON objects whose key order matters (`users`, `data` and each channel's
//! message map) are decoded into [`Entries`], which keeps document order.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{DateTime, Local, TimeZone};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::error::{DhtError, Result};

/// A JSON object decoded as key/value pairs in document order.
///
/// A key that appears more than once keeps the position of its first
/// occurrence and the value of its last, the same way `serde_json::Value`
/// does.
#[derive(Debug)]
pub struct Entries<T>(pub Vec<(String, T)>);

impl<T> Entries<T> {
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object had no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let capacity = map.size_hint().unwrap_or(0);
                let mut entries: Vec<(String, T)> = Vec::with_capacity(capacity);
                let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    // Repeated keys keep their first position and take the last value
                    if let Some(&pos) = positions.get(&key) {
                        entries[pos].1 = value;
                    } else {
                        positions.insert(key.clone(), entries.len());
                        entries.push((key, value));
                    }
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Top-level dump document.
#[derive(Debug, Deserialize)]
pub struct DhtDump {
    pub meta: DhtMeta,
    /// Channel id -> (message id -> message record)
    pub data: Entries<Entries<DhtRawMessage>>,
}

/// The `meta` section.
#[derive(Debug, Deserialize)]
pub struct DhtMeta {
    pub users: Entries<DhtRawUser>,
    pub userindex: DhtRawUserIndex,
    pub servers: Vec<DhtServer>,
}

/// Entry of `meta.users`.
#[derive(Debug, Deserialize)]
pub struct DhtRawUser {
    pub name: String,
}

/// Entry of `meta.servers`.
#[derive(Debug, Deserialize)]
pub struct DhtServer {
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
}

/// `meta.userindex` as written by the exporter.
///
/// Current exports write an array of user ids addressed by position; the
/// object form maps arbitrary keys to user ids.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DhtRawUserIndex {
    Positional(Vec<String>),
    Keyed(HashMap<String, String>),
}

/// The `u` field of a message record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndexKey {
    Number(u64),
    Text(String),
}

/// A message record from `data`.
#[derive(Debug, Deserialize)]
pub struct DhtRawMessage {
    pub u: IndexKey,
    pub t: i64,
    #[serde(default)]
    pub m: Option<String>,
}

/// `meta.userindex` with every user id already converted to a snowflake.
#[derive(Debug)]
pub enum UserIndex {
    Positional(Vec<u64>),
    Keyed(HashMap<String, u64>),
}

impl UserIndex {
    /// Validates the raw index.
    ///
    /// Every entry is checked up front, whether or not a message refers to
    /// it. Any non-numeric user id is a schema error.
    pub fn from_raw(raw: DhtRawUserIndex) -> Result<Self> {
        match raw {
            DhtRawUserIndex::Positional(ids) => ids
                .iter()
                .map(|id| parse_snowflake(id, "userindex"))
                .collect::<Result<Vec<_>>>()
                .map(UserIndex::Positional),
            DhtRawUserIndex::Keyed(map) => map
                .into_iter()
                .map(|(key, id)| Ok((key, parse_snowflake(&id, "userindex")?)))
                .collect::<Result<HashMap<_, _>>>()
                .map(UserIndex::Keyed),
        }
    }

    /// Maps a message's `u` key to a user id. `None` on any miss.
    pub fn lookup(&self, key: &IndexKey) -> Option<u64> {
        match (self, key) {
            (UserIndex::Positional(ids), IndexKey::Number(n)) => {
                usize::try_from(*n).ok().and_then(|i| ids.get(i)).copied()
            }
            (UserIndex::Positional(ids), IndexKey::Text(s)) => {
                s.parse::<usize>().ok().and_then(|i| ids.get(i)).copied()
            }
            (UserIndex::Keyed(map), IndexKey::Number(n)) => map.get(&n.to_string()).copied(),
            (UserIndex::Keyed(map), IndexKey::Text(s)) => map.get(s).copied(),
        }
    }
}

/// Parses a string-encoded snowflake id.
pub fn parse_snowflake(raw: &str, field: &str) -> Result<u64> {
    raw.parse::<u64>()
        .map_err(|_| DhtError::schema(format!("{field}: id '{raw}' is not a valid integer")))
}

/// Converts epoch milliseconds to local time.
pub fn millis_to_local(ms: i64) -> Result<DateTime<Local>> {
    Local
        .timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| DhtError::schema(format!("timestamp {ms} is out of range")))
}
