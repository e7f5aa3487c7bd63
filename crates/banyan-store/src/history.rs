//! Append-only JSON array persistence for endpoint histories.
//!
//! Each endpoint category owns one file containing a single JSON array.
//! Appends are read-modify-write; a per-log mutex serializes writers so
//! concurrent appends to the same log cannot lose entries.

use std::path::{Path, PathBuf};

use banyan_core::{Error, Result};
use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

/// One append-only history file.
pub struct HistoryLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HistoryLog {
    /// Open a history log at the given path. The file is created lazily on
    /// first append; a missing file reads as an empty history.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full history. Missing file means no history yet.
    pub fn load(&self) -> Result<Vec<serde_json::Value>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Io(e)),
        };
        let entries: Vec<serde_json::Value> = serde_json::from_str(&data)
            .map_err(|e| Error::Storage(format!("{} is not a JSON array: {}", self.path.display(), e)))?;
        Ok(entries)
    }

    /// Append one entry, rewriting the whole file. Returns the new length.
    pub fn append(&self, entry: &impl Serialize) -> Result<usize> {
        let _guard = self.write_lock.lock();

        let mut entries = self.load()?;
        entries.push(serde_json::to_value(entry)?);

        let json = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, json)?;
        Ok(entries.len())
    }

    /// Append, logging instead of failing — history persistence is best
    /// effort and must not break the response that produced the entry.
    pub fn append_or_log(&self, entry: &impl Serialize) {
        if let Err(e) = self.append(entry) {
            warn!("Failed to append to {}: {}", self.path.display(), e);
        }
    }

    /// Number of entries currently persisted.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
