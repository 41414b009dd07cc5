//! Storage engine for Folio
//!
//! The engine owns the two documents of a site:
//!
//! - [`DocumentStore`]: named sections of records with integer ids
//!   (upsert by id, auto-assigned ids, delete)
//! - [`MessageLog`]: newest-first visitor messages (post, list, delete)
//!
//! Both run every operation as one read-modify-write cycle under their own
//! document lock, on top of `folio-durability`'s atomic JSON files.
//! [`Site`] opens a data directory and wires the two together.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document_store;
pub mod message_log;
pub mod site;

pub use config::SiteConfig;
pub use document_store::DocumentStore;
pub use message_log::MessageLog;
pub use site::Site;
