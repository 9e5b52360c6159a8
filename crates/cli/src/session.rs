//! The calculator session: owns the history log and the active theme, and
//! routes user actions to the engine and the store.
//!
//! Nothing here prints. Every action returns a value or a `Notice` for the
//! front end (one-shot command or shell) to show.

use std::path::{Path, PathBuf};

use argand_eval::{Calculation, CalculationRequest, EvalError};
use argand_storage::{HistoryLog, Severity, StorageError};

use crate::ui::theme::Theme;

/// A user-facing message, the terminal stand-in for a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn from_eval(err: &EvalError) -> Notice {
        let title = match err {
            EvalError::InvalidInput { .. } | EvalError::MissingOperand { .. } => "Input Error",
            EvalError::UnknownOperation { .. } => "Operation Error",
            EvalError::DivisionByZero | EvalError::NotNumeric { .. } => "Calculation Error",
        };
        Notice {
            severity: Severity::Error,
            title,
            message: err.to_string(),
        }
    }

    pub fn from_storage(err: &StorageError) -> Notice {
        let title = match err {
            StorageError::FileNotFound { .. } | StorageError::Malformed { .. } => "Load Error",
            StorageError::Io { .. } => "History Error",
        };
        Notice {
            severity: err.severity(),
            title,
            message: err.to_string(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}", level, self.title, self.message)
    }
}

pub struct Session {
    history: HistoryLog,
    history_path: PathBuf,
    theme: Theme,
}

impl Session {
    pub fn new(history_path: impl Into<PathBuf>, theme: Theme) -> Self {
        Session {
            history: HistoryLog::new(),
            history_path: history_path.into(),
            theme,
        }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Run one calculation. Records (including recorded errors) are
    /// appended to the history; plots and rejected input are not.
    pub fn submit(&mut self, request: &CalculationRequest) -> Result<Calculation, Notice> {
        let calc = argand_eval::calculate(request).map_err(|e| {
            tracing::info!(error = %e, "calculation rejected");
            Notice::from_eval(&e)
        })?;
        if let Calculation::Record(record) = &calc {
            tracing::info!(entry = record.display(), "calculation recorded");
            self.history.append(record.display());
        }
        Ok(calc)
    }

    /// Save to `path`, or to the configured history file.
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf, Notice> {
        let target = path.unwrap_or(&self.history_path);
        self.history.save(target).map_err(|e| {
            tracing::warn!(error = %e, "save failed");
            Notice::from_storage(&e)
        })?;
        Ok(target.to_path_buf())
    }

    /// Replace the history with the contents of `path` (or the configured
    /// file). Returns the number of entries loaded.
    pub fn load(&mut self, path: Option<&Path>) -> Result<usize, Notice> {
        let target = path.unwrap_or(&self.history_path).to_path_buf();
        self.history.load(&target).map_err(|e| {
            tracing::warn!(error = %e, "load failed");
            Notice::from_storage(&e)
        })?;
        Ok(self.history.len())
    }

    /// Load the configured history file if there is one. A missing file
    /// leaves the history as it is.
    pub fn resume(&mut self) -> Result<usize, Notice> {
        match self.history.load(&self.history_path) {
            Ok(()) => Ok(self.history.len()),
            Err(StorageError::FileNotFound { .. }) => Ok(self.history.len()),
            Err(e) => {
                tracing::warn!(error = %e, "could not resume history");
                Err(Notice::from_storage(&e))
            }
        }
    }

    pub fn clear(&mut self) {
        tracing::info!(entries = self.history.len(), "history cleared");
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argand_eval::{OperandInput, Operation};

    fn request(op: Operation, a: (&str, &str), b: (&str, &str)) -> CalculationRequest {
        CalculationRequest {
            operation: op,
            operand1: OperandInput::new(a.0, a.1),
            operand2: Some(OperandInput::new(b.0, b.1)),
        }
    }

    #[test]
    fn add_appends_sole_entry() {
        let mut s = Session::new("unused.json", Theme::Light);
        s.submit(&request(Operation::Add, ("3", "4"), ("1", "2"))).unwrap();
        assert_eq!(s.history().entries(), ["(3+4j) + (1+2j) = (4+6j)"]);
    }

    #[test]
    fn division_by_zero_is_appended() {
        let mut s = Session::new("unused.json", Theme::Light);
        s.submit(&request(Operation::Divide, ("0", "0"), ("0", "0"))).unwrap();
        assert_eq!(
            s.history().entries(),
            ["(0+0j) / (0+0j) = Error: Division by zero is not allowed."]
        );
    }

    #[test]
    fn invalid_input_is_not_appended() {
        let mut s = Session::new("unused.json", Theme::Light);
        let notice = s
            .submit(&request(Operation::Add, ("three", "4"), ("1", "2")))
            .unwrap_err();
        assert_eq!(notice.title, "Input Error");
        assert!(!notice.is_warning());
        assert!(s.history().is_empty());
    }

    #[test]
    fn plot_is_not_appended() {
        let mut s = Session::new("unused.json", Theme::Light);
        let calc = s
            .submit(&request(Operation::Plot, ("1", "1"), ("", "")))
            .unwrap();
        assert!(matches!(calc, Calculation::Plot(_)));
        assert!(s.history().is_empty());
    }

    #[test]
    fn save_clear_load_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut s = Session::new(&path, Theme::Dark);
        s.submit(&request(Operation::Add, ("3", "4"), ("1", "2"))).unwrap();
        s.submit(&request(Operation::Subtract, ("3", "4"), ("1", "2"))).unwrap();
        assert_eq!(s.save(None).unwrap(), path);
        s.clear();
        assert!(s.history().is_empty());
        assert_eq!(s.load(None).unwrap(), 2);
        assert_eq!(s.history().entries()[1], "(3+4j) - (1+2j) = (2+2j)");
    }

    #[test]
    fn load_missing_is_a_warning_and_keeps_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = Session::new(dir.path().join("absent.json"), Theme::Light);
        s.submit(&request(Operation::Add, ("1", "1"), ("1", "1"))).unwrap();
        let notice = s.load(None).unwrap_err();
        assert!(notice.is_warning());
        assert_eq!(notice.title, "Load Error");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn resume_tolerates_missing_file_but_not_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut s = Session::new(&path, Theme::Light);
        assert_eq!(s.resume().unwrap(), 0);

        std::fs::write(&path, r#"["(1+1j) conj = (1-1j)"]"#).unwrap();
        assert_eq!(s.resume().unwrap(), 1);

        std::fs::write(&path, "{}").unwrap();
        let notice = s.resume().unwrap_err();
        assert!(notice.is_warning());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn save_to_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let s = Session::new(dir.path().join("no/such/dir.json"), Theme::Light);
        let notice = s.save(None).unwrap_err();
        assert!(!notice.is_warning());
        assert_eq!(notice.title, "History Error");
    }
}
