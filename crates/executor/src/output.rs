//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant.

use folio_core::Map;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Successful command execution results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Acknowledgement with no data (deletes, message post)
    Ok,

    /// The id of an inserted or updated record
    Upserted {
        /// Assigned or confirmed id
        id: Value,
    },

    /// The whole content document
    Content(Map),

    /// Messages, newest first
    Messages(Vec<Value>),
}

impl Output {
    /// Render the response body sent to clients.
    ///
    /// | Output | Body |
    /// |--------|------|
    /// | `Ok` | `{"ok": true}` |
    /// | `Upserted` | `{"ok": true, "id": <id>}` |
    /// | `Content` | the content object |
    /// | `Messages` | the message array |
    pub fn into_json(self) -> Value {
        match self {
            Output::Ok => json!({"ok": true}),
            Output::Upserted { id } => json!({"ok": true, "id": id}),
            Output::Content(doc) => Value::Object(doc),
            Output::Messages(messages) => Value::Array(messages),
        }
    }
}
