use std::path::Path;

use crate::error::StorageError;
use crate::file;

/// File name used when no history path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// The session's calculation history.
///
/// Entries are display lines in insertion order; that order is also the
/// display order and the persisted order. The log has no size cap and does
/// no deduplication.
///
/// Persistence is explicit: `clear` and `append` only touch memory, and the
/// file changes on the next `save`. A failed `load` leaves the log as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<String>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one display line at the end.
    pub fn append(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Remove every entry from memory.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Persist every entry to `path`, overwriting the file.
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        file::write_entries(path, &self.entries)?;
        tracing::debug!(path = %path.display(), entries = self.entries.len(), "history saved");
        Ok(())
    }

    /// Replace the log with the entries stored at `path`.
    pub fn load(&mut self, path: &Path) -> Result<(), StorageError> {
        let entries = file::read_entries(path)?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "history loaded");
        self.entries = entries;
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
