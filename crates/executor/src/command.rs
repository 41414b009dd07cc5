//! Command enum defining all Folio operations.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Content | 3 | Sectioned record store |
/// | Message | 3 | Visitor message board |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Content (3) ====================
    /// Read the whole content document.
    /// Returns: `Output::Content`
    ContentGet,

    /// Insert or update a record in a section.
    /// Returns: `Output::Upserted`
    ContentUpsert {
        /// Section name
        section: String,
        /// Record fields; an `id` selects the record to update
        payload: Value,
    },

    /// Delete records from a section by id.
    /// Returns: `Output::Ok`
    ContentDelete {
        /// Section name
        section: String,
        /// Record id (compared after integer coercion)
        id: Value,
    },

    // ==================== Message (3) ====================
    /// List messages, newest first.
    /// Returns: `Output::Messages`
    MessageList,

    /// Post a new message.
    /// Returns: `Output::Ok`
    MessagePost {
        /// Sender name
        name: String,
        /// Sender email
        email: String,
        /// Message body
        message: String,
    },

    /// Delete messages by id.
    /// Returns: `Output::Ok`
    MessageDelete {
        /// Message id (compared after integer coercion)
        id: Value,
    },
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::ContentGet => "ContentGet",
            Command::ContentUpsert { .. } => "ContentUpsert",
            Command::ContentDelete { .. } => "ContentDelete",
            Command::MessageList => "MessageList",
            Command::MessagePost { .. } => "MessagePost",
            Command::MessageDelete { .. } => "MessageDelete",
        }
    }

    /// True if the command may write to disk
    pub fn is_write(&self) -> bool {
        !matches!(self, Command::ContentGet | Command::MessageList)
    }
}
