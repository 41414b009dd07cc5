//! DocumentStore: sectioned record store over one JSON document
//!
//! ## Document Shape
//!
//! ```text
//! {
//!   "projects": [ {"id": 1, "name": "A"}, {"id": 2, "name": "B"} ],
//!   "skills":   [ {"id": 1, "label": "Rust"} ]
//! }
//! ```
//!
//! ## Design Principles
//!
//! 1. **One lock per document**: every operation reads and writes inside a
//!    single acquisition of the document lock, so concurrent upserts never
//!    lose each other's changes.
//!
//! 2. **Uniform defaulting**: a missing or malformed document reads as `{}`,
//!    a missing or non-array section reads as `[]`.
//!
//! 3. **Soft ids**: ids are compared after [`coerce_id`]. Records with no id
//!    or a non-numeric id compare as `0`. Entries that are not JSON objects
//!    never match an id and are carried through untouched.

use folio_core::{coerce_id, is_truthy, record_id, Error, Map, Result, Value, ID_FIELD};
use folio_durability::{AtomicJsonFile, JsonFileGuard};
use std::path::Path;
use tracing::{debug, warn};

/// Sectioned record store backed by a single JSON object
#[derive(Debug)]
pub struct DocumentStore {
    file: AtomicJsonFile,
}

impl DocumentStore {
    /// Create a store over `file`
    pub fn new(file: AtomicJsonFile) -> Self {
        Self { file }
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The whole content document; `{}` if absent or malformed
    pub fn get_all(&self) -> Map {
        load_document(&self.file.lock())
    }

    /// Records of one section; empty if absent or not an array
    pub fn section(&self, name: &str) -> Vec<Value> {
        match load_document(&self.file.lock()).remove(name) {
            Some(Value::Array(records)) => records,
            _ => Vec::new(),
        }
    }

    /// Insert or update a record and return its id.
    ///
    /// - payload with a truthy `id`: merged into the record with the same
    ///   coerced id (keeping its position), or appended unchanged if none
    ///   matches. Returns the payload's id as given.
    /// - payload without one: assigned `max(id) + 1` within the section
    ///   (1 for an empty section) and appended. Returns the new id.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `section` is empty or `payload` is not an object;
    /// `PersistenceFailure` if the document could not be written.
    pub fn upsert(&self, section: &str, payload: Value) -> Result<Value> {
        if section.is_empty() {
            return Err(Error::invalid_request("section is required"));
        }
        let mut payload = match payload {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::invalid_request(format!(
                    "payload must be an object, got {}",
                    json_type(&other)
                )))
            }
        };

        let guard = self.file.lock();
        let mut doc = load_document(&guard);
        let mut records = take_section(&mut doc, section);

        let id = match payload.get(ID_FIELD) {
            Some(id) if is_truthy(id) => {
                let id = id.clone();
                let target = coerce_id(&id);
                match records
                    .iter_mut()
                    .find(|r| r.is_object() && record_id(r) == target)
                {
                    Some(Value::Object(existing)) => {
                        existing.extend(payload);
                        debug!(target: "folio::engine", section, id = target, "Updated record");
                    }
                    _ => {
                        records.push(Value::Object(payload));
                        debug!(target: "folio::engine", section, id = target, "Inserted record with caller id");
                    }
                }
                id
            }
            _ => {
                let max = records.iter().map(record_id).max().unwrap_or(0);
                let next = max
                    .checked_add(1)
                    .ok_or_else(|| Error::invalid_request(format!("no ids left in section '{}'", section)))?;
                payload.insert(ID_FIELD.to_string(), Value::from(next));
                records.push(Value::Object(payload));
                debug!(target: "folio::engine", section, id = next, "Inserted record");
                Value::from(next)
            }
        };

        doc.insert(section.to_string(), Value::Array(records));
        guard.write(&Value::Object(doc))?;
        Ok(id)
    }

    /// Delete every record in `section` whose coerced id equals `id`.
    ///
    /// Returns the number of records removed. Deleting from a missing section
    /// or with an id nothing matches is not an error.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `section` is empty or `id` is null;
    /// `PersistenceFailure` if the document could not be written.
    pub fn delete(&self, section: &str, id: &Value) -> Result<usize> {
        if section.is_empty() {
            return Err(Error::invalid_request("section is required"));
        }
        if id.is_null() {
            return Err(Error::invalid_request("id is required"));
        }
        let target = coerce_id(id);

        let guard = self.file.lock();
        let mut doc = load_document(&guard);

        let removed = match doc.get_mut(section) {
            Some(Value::Array(records)) => {
                let before = records.len();
                records.retain(|r| !(r.is_object() && record_id(r) == target));
                before - records.len()
            }
            _ => {
                debug!(target: "folio::engine", section, "Delete from missing section");
                return Ok(0);
            }
        };

        guard.write(&Value::Object(doc))?;
        debug!(target: "folio::engine", section, id = target, removed, "Deleted records");
        Ok(removed)
    }
}

/// Load the content document, normalizing anything but an object to `{}`
fn load_document(guard: &JsonFileGuard<'_>) -> Map {
    match guard.read() {
        Some(Value::Object(doc)) => doc,
        Some(other) => {
            warn!(
                target: "folio::engine",
                path = %guard.path().display(),
                found = json_type(&other),
                "Content document is not an object, treating as empty"
            );
            Map::new()
        }
        None => Map::new(),
    }
}

/// Remove a section from the document, normalizing non-arrays to `[]`
fn take_section(doc: &mut Map, section: &str) -> Vec<Value> {
    match doc.remove(section) {
        Some(Value::Array(records)) => records,
        _ => Vec::new(),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
