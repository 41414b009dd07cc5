//! Data directory layout
//!
//! A site keeps all of its state in one directory:
//!
//! ```text
//! data/
//! ├── folio.toml       # Configuration
//! ├── data.json        # Content document (object of arrays)
//! └── messages.json    # Message log (array)
//! ```
//!
//! The document file names come from configuration; the defaults are shown.

use crate::json_file::temp_path_for;
use folio_core::{Error, Result};
use std::path::{Component, Path, PathBuf};

/// Config file name placed in the data directory
pub const CONFIG_FILE_NAME: &str = "folio.toml";

/// Default content document file name
pub const DEFAULT_CONTENT_FILE: &str = "data.json";

/// Default message log file name
pub const DEFAULT_MESSAGES_FILE: &str = "messages.json";

/// Paths of everything inside a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    root: PathBuf,
    content: PathBuf,
    messages: PathBuf,
}

impl SitePaths {
    /// Layout with the default document file names
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::with_files(root, DEFAULT_CONTENT_FILE, DEFAULT_MESSAGES_FILE)
    }

    /// Layout with explicit document file names (relative to `root`, or absolute)
    pub fn with_files(
        root: impl AsRef<Path>,
        content_file: impl AsRef<Path>,
        messages_file: impl AsRef<Path>,
    ) -> Self {
        let root = root.as_ref().to_path_buf();
        SitePaths {
            content: root.join(content_file),
            messages: root.join(messages_file),
            root,
        }
    }

    /// Root data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `folio.toml` path
    pub fn config(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Content document path
    pub fn content(&self) -> &Path {
        &self.content
    }

    /// Message log path
    pub fn messages(&self) -> &Path {
        &self.messages
    }

    /// Create the root directory and the parents of both documents
    pub fn create_directories(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        for doc in [&self.content, &self.messages] {
            if let Some(parent) = doc.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Check that the two documents are distinct files and that neither
    /// sits on the other's temp sibling.
    ///
    /// Paths are compared after lexical normalization (`.` dropped, `..`
    /// folded), so `./data.json` and `data.json` are the same file.
    pub fn check_distinct(&self) -> Result<()> {
        let content = normalize(&self.content);
        let messages = normalize(&self.messages);

        if content == messages {
            return Err(Error::config(format!(
                "content_file and messages_file both point to '{}'",
                content.display()
            )));
        }
        if messages == temp_path_for(&content) || content == temp_path_for(&messages) {
            return Err(Error::config(format!(
                "'{}' and '{}' overlap: one is the other's temp file",
                content.display(),
                messages.display()
            )));
        }
        Ok(())
    }
}

/// Lexically normalize `path` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
