//! The Executor - single entry point to Folio's engine.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! site's stores and converts results to outputs.

use std::sync::Arc;

use folio_engine::Site;
use tracing::{debug, error, trace};

use crate::{Command, Error, Output, Result};

/// The command executor - single entry point to Folio's engine.
///
/// The Executor is **stateless**: it holds a reference to the site but
/// maintains no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across request threads.
///
/// # Example
///
/// ```ignore
/// use folio_executor::{Command, Executor};
/// use folio_engine::Site;
///
/// let executor = Executor::new(Site::open("./data")?);
/// let output = executor.execute(Command::ContentUpsert {
///     section: "projects".into(),
///     payload: serde_json::json!({"name": "A"}),
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    site: Arc<Site>,
}

impl Executor {
    /// Create a new executor over an open site.
    pub fn new(site: Arc<Site>) -> Self {
        Self { site }
    }

    /// The site this executor dispatches to
    pub fn site(&self) -> &Arc<Site> {
        &self.site
    }

    /// Execute a single command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        if cmd.is_write() {
            debug!(target: "folio::executor", command = name, "Executing write command");
        } else {
            trace!(target: "folio::executor", command = name, "Executing read command");
        }

        let result = self.dispatch(cmd).map_err(Error::from);

        if let Err(e) = &result {
            if e.is_client_error() {
                debug!(target: "folio::executor", command = name, error = %e, "Command rejected");
            } else {
                error!(target: "folio::executor", command = name, error = %e, "Command failed");
            }
        }
        result
    }

    fn dispatch(&self, cmd: Command) -> folio_core::Result<Output> {
        let content = self.site.content();
        let messages = self.site.messages();

        match cmd {
            Command::ContentGet => Ok(Output::Content(content.get_all())),
            Command::ContentUpsert { section, payload } => {
                let id = content.upsert(&section, payload)?;
                Ok(Output::Upserted { id })
            }
            Command::ContentDelete { section, id } => {
                content.delete(&section, &id)?;
                Ok(Output::Ok)
            }
            Command::MessageList => Ok(Output::Messages(messages.list())),
            Command::MessagePost {
                name,
                email,
                message,
            } => {
                messages.append(&name, &email, &message)?;
                Ok(Output::Ok)
            }
            Command::MessageDelete { id } => {
                messages.remove(&id)?;
                Ok(Output::Ok)
            }
        }
    }
}
