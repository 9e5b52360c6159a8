//! Calculation history: an ordered, append-only log of display lines that
//! persists to a single JSON file as an array of strings.

mod error;
mod file;
mod history;

pub use error::{Severity, StorageError};
pub use file::{read_entries, write_entries};
pub use history::{HistoryLog, DEFAULT_HISTORY_FILE};
