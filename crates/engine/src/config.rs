//! Site configuration via `folio.toml`
//!
//! On first open, a default `folio.toml` is created in the data directory.
//! To change settings, edit the file and restart.

use folio_core::{Error, Result};
use folio_durability::{SitePaths, DEFAULT_CONTENT_FILE, DEFAULT_MESSAGES_FILE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site configuration loaded from `folio.toml`.
///
/// # Example
///
/// ```toml
/// content_file = "data.json"
/// messages_file = "messages.json"
/// sync = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Content document, relative to the data directory unless absolute.
    #[serde(default = "default_content_file")]
    pub content_file: String,
    /// Message log, relative to the data directory unless absolute.
    #[serde(default = "default_messages_file")]
    pub messages_file: String,
    /// fsync every write before and after the rename.
    #[serde(default = "default_sync")]
    pub sync: bool,
}

fn default_content_file() -> String {
    DEFAULT_CONTENT_FILE.to_string()
}

fn default_messages_file() -> String {
    DEFAULT_MESSAGES_FILE.to_string()
}

fn default_sync() -> bool {
    true
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_file: default_content_file(),
            messages_file: default_messages_file(),
            sync: default_sync(),
        }
    }
}

impl SiteConfig {
    /// Config for tests: default files, no fsync.
    pub fn for_testing() -> Self {
        Self::default().with_sync(false)
    }

    /// Set whether writes are fsynced
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Set the content document file
    pub fn with_content_file(mut self, file: impl Into<String>) -> Self {
        self.content_file = file.into();
        self
    }

    /// Set the message log file
    pub fn with_messages_file(mut self, file: impl Into<String>) -> Self {
        self.messages_file = file.into();
        self
    }

    /// Validate configuration
    ///
    /// Both file names must be set and must not name the same file, or each
    /// other's temp sibling, since each document is guarded by its own lock.
    /// Relative names are compared as given; [`Site`](crate::Site) repeats the
    /// check once they are joined to the data directory.
    pub fn validate(&self) -> Result<()> {
        if self.content_file.trim().is_empty() {
            return Err(Error::config("content_file must not be empty"));
        }
        if self.messages_file.trim().is_empty() {
            return Err(Error::config("messages_file must not be empty"));
        }
        SitePaths::with_files("", &self.content_file, &self.messages_file).check_distinct()
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Folio site configuration
#
# Content document (object of section arrays), relative to this directory.
content_file = "data.json"

# Message board log (array, newest first), relative to this directory.
messages_file = "messages.json"

# fsync every write (default: true). Disable only for throwaway data.
sync = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: SiteConfig = toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
