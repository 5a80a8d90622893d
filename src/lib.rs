//! # dhtparse
//!
//! A Rust library for reading channel dumps produced by Discord History
//! Tracker and querying the messages they contain.
//!
//! ## Overview
//!
//! A dump is a single JSON document holding one channel's metadata, its user
//! registry, a compact `userindex` table and the raw message records. The
//! parser turns it into a [`Channel`]:
//!
//! - users keep the order of the registry
//! - every message's author is resolved through `userindex` to a shared
//!   [`User`], or left unresolved when the registry does not know it
//! - messages are stably sorted by send time
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use dhtparse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let channel = DhtParser::new().parse("dht.txt".as_ref())?;
//!
//!     for user in channel.find_users("jane", false, false) {
//!         let theirs = channel.messages().messages_from(&user);
//!         println!("{} sent {} messages", user.short_name(), theirs.len());
//!     }
//!
//!     let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!     let greetings = channel
//!         .messages()
//!         .messages_on(new_year)
//!         .messages_with("happy new year", false);
//!     println!("{} greetings", greetings.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`Parser`](parser::Parser) trait, [`DhtParser`](parser::DhtParser), [`parse`]
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`ChannelSelection`](config::ChannelSelection)
//! - [`core`] - [`MessageCollection`] and the text matching rules
//! - [`parsing`] - raw dump shapes and id/timestamp normalization
//! - [`error`] - [`DhtError`], [`Result`]
//!
//! ## Logging
//!
//! The parser emits [`tracing`] events (`debug` summaries, a `warn` when
//! authors cannot be resolved). Install a subscriber in your application to
//! see them.

pub mod channel;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod user;

// Re-export the main types at the crate root for convenience
pub use channel::Channel;
pub use crate::core::MessageCollection;
pub use error::{DhtError, Result};
pub use message::Message;
pub use parser::parse;
pub use user::User;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use dhtparse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Channel, Message, MessageCollection, User};

    pub use crate::error::{DhtError, Result};

    pub use crate::parser::{DhtParser, Parser};

    pub use crate::config::{ChannelSelection, ParseConfig};

    pub use crate::core::filter::{MatchMode, TextMatch};
}
