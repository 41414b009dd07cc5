//! Durability layer for Folio
//!
//! This crate handles everything that touches disk:
//!
//! - AtomicJsonFile: crash-safe JSON documents (temp file + fsync + rename)
//!   with one lock per document
//! - SitePaths: data directory layout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json_file; // Atomic JSON document I/O
pub mod paths; // Data directory layout

pub use json_file::{read_json, temp_path_for, write_json_atomic, AtomicJsonFile, JsonFileGuard};
pub use paths::{SitePaths, CONFIG_FILE_NAME, DEFAULT_CONTENT_FILE, DEFAULT_MESSAGES_FILE};
