use std::path::PathBuf;

/// How a storage failure should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Recoverable and expected (no saved history yet, unreadable file).
    Warning,
    /// The requested action failed.
    Error,
}

/// All errors that can be returned by the history store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No history file exists at the given path.
    #[error("no saved history found at {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but is not a JSON array of strings.
    #[error("history file {} is not a list of entries: {message}", .path.display())]
    Malformed { path: PathBuf, message: String },

    /// Reading or writing the file failed (permissions, disk full, ...).
    #[error("could not access history file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Missing and malformed files are warnings; I/O failures are errors.
    pub fn severity(&self) -> Severity {
        match self {
            StorageError::FileNotFound { .. } | StorageError::Malformed { .. } => {
                Severity::Warning
            }
            StorageError::Io { .. } => Severity::Error,
        }
    }
}
