//! MessageLog: newest-first visitor message board over one JSON array
//!
//! New messages are inserted at the head of the array. `list()` still sorts
//! by `created` descending, so hand-edited or reordered files come back
//! newest-first. The sort is stable: messages created in the same
//! millisecond keep their stored order.
//!
//! Entries are kept as raw JSON values. Anything in the file that does not
//! look like a message is preserved on rewrite rather than dropped.

use crate::document_store::json_type;
use folio_core::{coerce_id, record_id, Clock, Error, Message, Result, Value};
use folio_durability::{AtomicJsonFile, JsonFileGuard};
use std::cmp::Reverse;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Append-oriented message board backed by a single JSON array
pub struct MessageLog {
    file: AtomicJsonFile,
    clock: Arc<dyn Clock>,
}

impl MessageLog {
    /// Create a log over `file`, stamping messages with `clock`
    pub fn new(file: AtomicJsonFile, clock: Arc<dyn Clock>) -> Self {
        Self { file, clock }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// All messages, newest first; empty if absent or malformed
    pub fn list(&self) -> Vec<Value> {
        let mut messages = load_log(&self.file.lock());
        messages.sort_by_key(|m| Reverse(created(m)));
        messages
    }

    /// Post a message at the head of the log.
    ///
    /// `id` and `created` are both the current time in milliseconds.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if any field is empty;
    /// `PersistenceFailure` if the log could not be written.
    pub fn append(&self, name: &str, email: &str, message: &str) -> Result<Message> {
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(Error::invalid_request("name, email and message are required"));
        }

        let guard = self.file.lock();
        let mut messages = load_log(&guard);
        let entry = Message::new(name, email, message, self.clock.now_millis());
        messages.insert(0, entry.to_value());
        guard.write(&Value::Array(messages))?;

        debug!(target: "folio::engine", id = entry.id, "Posted message");
        Ok(entry)
    }

    /// Remove every message whose coerced id equals `id`.
    ///
    /// The log is only rewritten if something was removed. Returns whether
    /// anything was.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `id` is null;
    /// `PersistenceFailure` if the log could not be written.
    pub fn remove(&self, id: &Value) -> Result<bool> {
        if id.is_null() {
            return Err(Error::invalid_request("id is required"));
        }
        let target = coerce_id(id);

        let guard = self.file.lock();
        let mut messages = load_log(&guard);
        let before = messages.len();
        messages.retain(|m| !(m.is_object() && record_id(m) == target));

        if messages.len() == before {
            debug!(target: "folio::engine", id = target, "No message to remove");
            return Ok(false);
        }

        guard.write(&Value::Array(messages))?;
        debug!(target: "folio::engine", id = target, "Removed message");
        Ok(true)
    }
}

impl std::fmt::Debug for MessageLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageLog")
            .field("file", &self.file)
            .finish_non_exhaustive()
    }
}

fn created(message: &Value) -> i64 {
    message.get("created").map(coerce_id).unwrap_or(0)
}

fn load_log(guard: &JsonFileGuard<'_>) -> Vec<Value> {
    match guard.read() {
        Some(Value::Array(messages)) => messages,
        Some(other) => {
            warn!(
                target: "folio::engine",
                path = %guard.path().display(),
                found = json_type(&other),
                "Message log is not an array, treating as empty"
            );
            Vec::new()
        }
        None => Vec::new(),
    }
}
