//! Error types for Folio
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Read-side problems (missing or corrupt documents) are deliberately absent:
//! they normalize to an empty document and never surface as errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Folio
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing required input
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization or disk write failed; the previous document is intact
    #[error("failed to persist {}: {source}", path.display())]
    PersistenceFailure {
        /// Target document path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration file unreadable or invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build an `InvalidRequest` error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Error::InvalidRequest(msg.into())
    }

    /// Build a `PersistenceFailure` error for `path`
    pub fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::PersistenceFailure {
            path: path.into(),
            source,
        }
    }

    /// Build a `Config` error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// True if the caller sent bad input (client error)
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Error::InvalidRequest(_))
    }

    /// True if a write to disk failed (server error)
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Error::PersistenceFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_request() {
        let err = Error::invalid_request("section is required");
        let msg = err.to_string();
        assert!(msg.contains("invalid request"));
        assert!(msg.contains("section is required"));
        assert!(err.is_invalid_request());
        assert!(!err.is_persistence_failure());
    }

    #[test]
    fn test_error_display_persistence() {
        let err = Error::persistence(
            "/srv/data/data.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to persist"));
        assert!(msg.contains("data.json"));
        assert!(msg.contains("access denied"));
        assert!(err.is_persistence_failure());
    }

    #[test]
    fn test_persistence_exposes_source() {
        use std::error::Error as _;

        let err = Error::persistence("x.json", io::Error::new(io::ErrorKind::Other, "disk full"));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "disk full");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::config("content_file must not be empty");
        assert!(err.to_string().contains("configuration error"));
    }
}
