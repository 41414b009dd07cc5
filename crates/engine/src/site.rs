//! Site: the content store and message log of one data directory
//!
//! A `Site` is constructed once at startup and shared by reference
//! (`Arc<Site>`) with whatever serves requests. Each of its two documents has
//! its own lock, so content operations never wait on message operations.
//!
//! Opening a site:
//! 1. Creates the data directory
//! 2. Writes a default `folio.toml` if missing, then loads it
//! 3. Removes temp files left by interrupted writes
//! 4. Initializes absent documents (`{}` for content, `[]` for messages)

use crate::config::SiteConfig;
use crate::document_store::DocumentStore;
use crate::message_log::MessageLog;
use folio_core::{Clock, Error, Result, SystemClock, Value};
use folio_durability::{AtomicJsonFile, SitePaths};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The stores of one data directory
#[derive(Debug)]
pub struct Site {
    paths: SitePaths,
    config: SiteConfig,
    content: DocumentStore,
    messages: MessageLog,
}

impl Site {
    /// Open the site in `data_dir`, reading (or creating) its `folio.toml`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Arc<Self>> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir).map_err(|e| Error::persistence(data_dir, e))?;

        let config_path = SitePaths::from_root(data_dir).config();
        SiteConfig::write_default_if_missing(&config_path)?;
        let config = SiteConfig::from_file(&config_path)?;

        Self::open_with_config(data_dir, config)
    }

    /// Open the site in `data_dir` with an explicit config; `folio.toml` is
    /// neither read nor written.
    pub fn open_with_config(data_dir: impl AsRef<Path>, config: SiteConfig) -> Result<Arc<Self>> {
        Self::open_with_clock(data_dir, config, Arc::new(SystemClock))
    }

    /// Like [`Site::open_with_config`], stamping messages with `clock`.
    pub fn open_with_clock(
        data_dir: impl AsRef<Path>,
        config: SiteConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Arc<Self>> {
        config.validate()?;

        let paths = SitePaths::with_files(data_dir, &config.content_file, &config.messages_file);
        paths.check_distinct()?;
        paths
            .create_directories()
            .map_err(|e| Error::persistence(paths.root(), e))?;

        let content = AtomicJsonFile::new(paths.content()).with_sync(config.sync);
        let messages = AtomicJsonFile::new(paths.messages()).with_sync(config.sync);

        content.cleanup_temp()?;
        messages.cleanup_temp()?;
        content.ensure_initialized(&Value::Object(Default::default()))?;
        messages.ensure_initialized(&Value::Array(Vec::new()))?;

        info!(
            target: "folio::engine",
            root = %paths.root().display(),
            content = %paths.content().display(),
            messages = %paths.messages().display(),
            sync = config.sync,
            "Site opened"
        );

        Ok(Arc::new(Site {
            paths,
            config,
            content: DocumentStore::new(content),
            messages: MessageLog::new(messages, clock),
        }))
    }

    /// The content document store
    pub fn content(&self) -> &DocumentStore {
        &self.content
    }

    /// The message board
    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Data directory layout
    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    /// Active configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
