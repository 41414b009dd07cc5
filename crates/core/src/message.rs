//! Message board entry

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A visitor message as stored in the message log.
///
/// `id` and `created` are taken from the same millisecond timestamp, so two
/// messages posted within one millisecond share an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message id (creation time in milliseconds)
    pub id: i64,
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message body
    pub message: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created: i64,
}

impl Message {
    /// Create a message stamped at `now_millis`
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        now_millis: i64,
    ) -> Self {
        Message {
            id: now_millis,
            name: name.into(),
            email: email.into(),
            message: message.into(),
            created: now_millis,
        }
    }

    /// The message as a JSON object
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "message": self.message,
            "created": self.created,
        })
    }
}
