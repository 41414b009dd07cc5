//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Mapped to status codes**: Each variant has one HTTP status

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Status |
/// |----------|----------|--------|
/// | Validation | `InvalidRequest` | 400 |
/// | Routing | `NotFound`, `MethodNotAllowed` | 404, 405 |
/// | System | `Persistence`, `Config` | 500 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation Errors ====================
    /// Malformed or missing required input
    #[error("invalid request: {reason}")]
    InvalidRequest {
        /// What was wrong with the input
        reason: String,
    },

    // ==================== Routing Errors ====================
    /// No operation at this path
    #[error("not found: {path}")]
    NotFound {
        /// Requested path
        path: String,
    },

    /// The path exists but not for this method
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed {
        /// Requested method
        method: String,
        /// Requested path
        path: String,
    },

    // ==================== System Errors ====================
    /// A document could not be written; nothing was changed
    #[error("persistence failure: {reason}")]
    Persistence {
        /// Underlying failure
        reason: String,
    },

    /// Site configuration problem
    #[error("configuration error: {reason}")]
    Config {
        /// Underlying failure
        reason: String,
    },
}

impl Error {
    /// Shorthand for `InvalidRequest`
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Error::InvalidRequest {
            reason: reason.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Error::InvalidRequest { .. } => 400,
            Error::NotFound { .. } => 404,
            Error::MethodNotAllowed { .. } => 405,
            Error::Persistence { .. } | Error::Config { .. } => 500,
        }
    }

    /// True for errors caused by the client
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Response body: `{"error": "<message>"}`
    pub fn to_json(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}

impl From<folio_core::Error> for Error {
    fn from(e: folio_core::Error) -> Self {
        match e {
            folio_core::Error::InvalidRequest(reason) => Error::InvalidRequest { reason },
            e @ folio_core::Error::PersistenceFailure { .. } => Error::Persistence {
                reason: e.to_string(),
            },
            folio_core::Error::Config(reason) => Error::Config { reason },
        }
    }
}
