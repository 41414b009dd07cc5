//! Folio - crash-safe JSON document storage for a small content site
//!
//! Folio keeps a site's editable content and its contact-form messages in
//! two JSON documents. Every write replaces the document atomically, so a
//! reader sees either the old file or the new one and never a torn write.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio::{Command, Executor, Site};
//!
//! let executor = Executor::new(Site::open("./data")?);
//! executor.execute(Command::ContentUpsert {
//!     section: "projects".into(),
//!     payload: serde_json::json!({"name": "A"}),
//! })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], either as typed [`Command`]s
//! or through [`Executor::handle`] for an HTTP front end. Storage internals
//! (atomic files, stores, clocks) live in the member crates.

// Re-export the public API from folio-executor
pub use folio_executor::*;
