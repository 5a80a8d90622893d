//! Unified error types for dhtparse.
//!
//! Every fallible operation in the crate returns [`DhtError`]. Parsing is
//! all-or-nothing: the first structural problem aborts the whole parse and
//! no partial [`Channel`](crate::Channel) is produced.
//!
//! Query operations on a parsed channel never fail. A miss is an empty
//! collection or `None`, and an author that cannot be resolved is recorded
//! on the message itself rather than raised as an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for dhtparse operations.
///
/// # Example
///
/// ```rust
/// use dhtparse::Result;
/// use dhtparse::Channel;
///
/// fn load() -> Result<Option<Channel>> {
///     Ok(None)
/// }
/// ```
pub type Result<T> = std::result::Result<T, DhtError>;

/// The error type for all dhtparse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DhtError {
    /// The source document could not be read.
    ///
    /// This typically happens when the file does not exist or permission
    /// is denied.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The document does not conform to the expected dump schema.
    ///
    /// Covers invalid JSON, missing `meta`/`data` sections, wrong value
    /// types, an empty `servers` list, non-numeric ids, timestamps out of
    /// range, and a `data` section with the wrong number of channels.
    #[error("Invalid DHT dump{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Schema {
        /// What went wrong
        #[source]
        source: SchemaErrorKind,
        /// The file path, if the document came from a file
        path: Option<PathBuf>,
    },
}

/// Kinds of schema errors.
#[derive(Debug, Error)]
pub enum SchemaErrorKind {
    /// The document is not valid JSON or a value has the wrong shape
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// The JSON is well-formed but violates a structural rule
    #[error("{0}")]
    Structure(String),
}

impl From<serde_json::Error> for DhtError {
    fn from(err: serde_json::Error) -> Self {
        DhtError::Schema {
            source: SchemaErrorKind::Json(err),
            path: None,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl DhtError {
    /// Creates a structural schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        DhtError::Schema {
            source: SchemaErrorKind::Structure(message.into()),
            path: None,
        }
    }

    /// Attaches the originating file path to a schema error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            DhtError::Schema { source, .. } => DhtError::Schema {
                source,
                path: Some(file.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, DhtError::Io(_))
    }

    /// Returns `true` if the document failed schema validation.
    pub fn is_schema(&self) -> bool {
        matches!(self, DhtError::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = DhtError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_schema_error_with_path() {
        let err = DhtError::schema("servers list is empty").with_path("/tmp/dump.txt");
        let display = err.to_string();
        assert!(display.contains("servers list is empty"));
        assert!(display.contains("/tmp/dump.txt"));
    }

    #[test]
    fn test_schema_error_without_path() {
        let err = DhtError::schema("no channel");
        let display = err.to_string();
        assert!(display.starts_with("Invalid DHT dump: "));
        assert!(!display.contains("file:"));
    }

    #[test]
    fn test_json_error_is_schema() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = DhtError::from(json_err);
        assert!(err.is_schema());
        assert!(!err.is_io());
    }

    #[test]
    fn test_with_path_leaves_io_untouched() {
        let err = DhtError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"))
            .with_path("/tmp/x");
        assert!(err.is_io());
        assert!(!err.to_string().contains("/tmp/x"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let err = DhtError::schema("bad");
        assert!(err.source().is_some());

        let io_err = DhtError::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(io_err.source().is_some());
    }
}
