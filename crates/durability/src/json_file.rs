//! Crash-safe JSON document file
//!
//! Uses the write-fsync-rename pattern so a document on disk is always either
//! the previous complete version or the new complete version:
//!
//! 1. Serialize to a temp sibling (`<file>.tmp`)
//! 2. fsync the temp file
//! 3. Atomic rename onto the target
//! 4. fsync the parent directory
//!
//! Reads never fail. A missing, unreadable or unparseable file reads as
//! `None` and callers substitute an empty document.
//!
//! Every [`AtomicJsonFile`] owns its own mutex. A read-modify-write cycle
//! takes the lock once through [`AtomicJsonFile::lock`] and performs both the
//! read and the write through the returned guard.

use folio_core::{Error, Result, Value};
use parking_lot::{Mutex, MutexGuard};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A JSON document on disk with serialized, atomic read-modify-write access
#[derive(Debug)]
pub struct AtomicJsonFile {
    path: PathBuf,
    temp_path: PathBuf,
    sync: bool,
    lock: Mutex<()>,
}

impl AtomicJsonFile {
    /// Create a handle for the document at `path`
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        AtomicJsonFile {
            temp_path: temp_path_for(&path),
            path,
            sync: true,
            lock: Mutex::new(()),
        }
    }

    /// Enable or disable fsync on write (enabled by default)
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Path of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the temp sibling used while writing
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Acquire the document lock for a read-modify-write cycle
    pub fn lock(&self) -> JsonFileGuard<'_> {
        JsonFileGuard {
            file: self,
            _guard: self.lock.lock(),
        }
    }

    /// Read the document under the lock
    pub fn read(&self) -> Option<Value> {
        self.lock().read()
    }

    /// Replace the document under the lock
    pub fn write(&self, value: &Value) -> Result<()> {
        self.lock().write(value)
    }

    /// Write `default` if the document does not exist yet
    ///
    /// Returns `true` if the document was created.
    pub fn ensure_initialized(&self, default: &Value) -> Result<bool> {
        let guard = self.lock();
        if self.path.exists() {
            return Ok(false);
        }
        guard.write(default)?;
        info!(
            target: "folio::durability",
            path = %self.path.display(),
            "Initialized empty document"
        );
        Ok(true)
    }

    /// Remove a temp sibling left behind by an interrupted write
    ///
    /// Returns `true` if a file was removed.
    pub fn cleanup_temp(&self) -> Result<bool> {
        let _guard = self.lock();
        if !self.temp_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.temp_path).map_err(|e| Error::persistence(&self.temp_path, e))?;
        warn!(
            target: "folio::durability",
            path = %self.temp_path.display(),
            "Removed stale temp file"
        );
        Ok(true)
    }
}

/// Exclusive access to an [`AtomicJsonFile`] for one logical operation
pub struct JsonFileGuard<'a> {
    file: &'a AtomicJsonFile,
    _guard: MutexGuard<'a, ()>,
}

impl JsonFileGuard<'_> {
    /// Read the document; `None` if missing or corrupt
    pub fn read(&self) -> Option<Value> {
        read_json(&self.file.path)
    }

    /// Atomically replace the document
    pub fn write(&self, value: &Value) -> Result<()> {
        write_json_atomic(&self.file.path, value, self.file.sync)
    }

    /// Path of the locked document
    pub fn path(&self) -> &Path {
        &self.file.path
    }
}

/// Temp sibling for `path`: the same file name with `.tmp` appended
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read and parse a JSON document without locking.
///
/// Returns `None` if the file is missing, unreadable or not valid JSON.
pub fn read_json(path: &Path) -> Option<Value> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(
                target: "folio::durability",
                path = %path.display(),
                error = %e,
                "Document unreadable, treating as absent"
            );
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(
                target: "folio::durability",
                path = %path.display(),
                error = %e,
                "Document is not valid JSON, treating as absent"
            );
            None
        }
    }
}

/// Atomically write `value` to `path` without locking.
///
/// If any step fails, the temp file is cleaned up, the original document is
/// left untouched and `Error::PersistenceFailure` is returned.
pub fn write_json_atomic(path: &Path, value: &Value, sync: bool) -> Result<()> {
    let temp_path = temp_path_for(path);

    debug!(
        target: "folio::durability",
        final_path = %path.display(),
        temp_path = %temp_path.display(),
        "Starting atomic JSON write"
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| Error::persistence(path, e))?;
        }
    }

    // Clean up stale temp file if exists (from previous failed attempt)
    if temp_path.exists() {
        match fs::remove_file(&temp_path) {
            Ok(()) => warn!(
                target: "folio::durability",
                path = %temp_path.display(),
                "Removed stale temp file"
            ),
            Err(e) => warn!(
                target: "folio::durability",
                path = %temp_path.display(),
                error = %e,
                "Failed to remove stale temp file"
            ),
        }
    }

    let result = write_temp(&temp_path, value, sync).and_then(|()| fs::rename(&temp_path, path));

    match result {
        Ok(()) => {
            if sync {
                // The rename is already visible; a failed directory sync only
                // weakens durability across power loss.
                if let Err(e) = sync_parent_dir(path) {
                    warn!(
                        target: "folio::durability",
                        path = %path.display(),
                        error = %e,
                        "Directory fsync failed after rename"
                    );
                }
            }
            debug!(target: "folio::durability", path = %path.display(), "Atomic rename completed");
            Ok(())
        }
        Err(e) => {
            warn!(
                target: "folio::durability",
                temp_path = %temp_path.display(),
                error = %e,
                "Write failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&temp_path);
            Err(Error::persistence(path, e))
        }
    }
}

fn write_temp(temp_path: &Path, value: &Value, sync: bool) -> io::Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    bytes.push(b'\n');

    let mut file = File::create(temp_path)?;
    file.write_all(&bytes)?;
    if sync {
        file.sync_all()?;
    }
    Ok(())
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => File::open(dir)?.sync_all(),
        _ => File::open(".")?.sync_all(),
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
