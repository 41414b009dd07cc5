//! Core types for Folio
//!
//! This crate defines the foundational types shared by every layer:
//! - Error: the error taxonomy (invalid request, persistence failure, config)
//! - id: soft integer coercion and truthiness for record ids
//! - Clock: millisecond time source for message stamps
//! - Message: the message board entry

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod error;
pub mod id;
pub mod message;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use id::{coerce_id, is_truthy, record_id, ID_FIELD};
pub use message::Message;

/// A JSON object
pub type Map = serde_json::Map<String, serde_json::Value>;

/// Any JSON value
pub use serde_json::Value;
