//! Raw dump decoding.
//!
//! This module holds the serde shapes of the dump and the conversion
//! helpers the parser uses to normalize ids and timestamps.

pub mod dht;

pub use dht::{
    DhtDump, DhtMeta, DhtRawMessage, DhtRawUser, DhtRawUserIndex, DhtServer, Entries, IndexKey,
    UserIndex, millis_to_local, parse_snowflake,
};
