//! # Folio Executor
//!
//! The public API for Folio - crash-safe JSON storage for a small content site.
//!
//! It provides:
//! - [`Executor`] - dispatches commands to an open [`Site`]
//! - [`Command`]/[`Output`] - the operation set and its results
//! - [`Executor::handle`] - the HTTP binding (method + path + JSON body)
//!
//! ## Quick Start
//!
//! ```text
//! use folio_executor::{Executor, Site};
//!
//! let executor = Executor::new(Site::open("./data")?);
//! let response = executor.handle("POST", "/api/item", Some(&body));
//! // write response.status and response.body back to the client
//! ```

#![warn(missing_docs)]

mod command;
mod error;
mod executor;
mod http;
mod output;

#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use http::HttpResponse;
pub use output::Output;

pub use folio_engine::{Site, SiteConfig};
pub use serde_json::Value;

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
