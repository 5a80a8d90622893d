//! Query layer over parsed messages.
//!
//! This module contains:
//! - [`collection`] - [`MessageCollection`], the ordered message container
//! - [`filter`] - [`TextMatch`], the case/strict text matching rules shared
//!   by message and user queries
//!
//! # Quick Start
//!
//! ```rust
//! use dhtparse::core::{MessageCollection, TextMatch};
//!
//! let empty = MessageCollection::new();
//! assert!(empty.messages_with("anything", false).is_empty());
//! assert!(TextMatch::exact("Bob").matches("bob"));
//! ```

pub mod collection;
pub mod filter;

pub use collection::MessageCollection;
pub use filter::{MatchMode, TextMatch};
