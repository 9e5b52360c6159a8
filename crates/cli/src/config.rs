//! Calculator settings, read from an optional TOML file.
//!
//! # Example
//!
//! ```toml
//! [history]
//! path = "history.json"
//!
//! [display]
//! theme = "dark"
//! color = "auto"
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! Every section and key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "argand.toml";

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub history: HistorySettings,
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

/// `[history]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistorySettings {
    /// History file, relative to the working directory unless absolute.
    pub path: PathBuf,
}

impl Default for HistorySettings {
    fn default() -> Self {
        HistorySettings {
            path: PathBuf::from(argand_storage::DEFAULT_HISTORY_FILE),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub theme: Theme,
    pub color: ColorMode,
}

/// Whether terminal output is styled with ANSI escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Style only when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        use std::io::IsTerminal;
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive, e.g. `"warn"` or `"argand_storage=debug"`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "warn".to_string(),
        }
    }
}

// ── Functions ─────────────────────────────────────────────────────────────────

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Settings, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Read settings from `path`.
    ///
    /// Returns a human-readable error string on failure.
    pub fn read(path: &Path) -> Result<Settings, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
        Settings::from_toml(&content)
            .map_err(|e| format!("could not parse '{}': {}", path.display(), e))
    }

    /// Resolve settings for this run.
    ///
    /// An explicit path must exist. Without one, `argand.toml` in the working
    /// directory is used if present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Settings, String> {
        match explicit {
            Some(path) => Settings::read(path),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Settings::read(implicit)
                } else {
                    Ok(Settings::default())
                }
            }
        }
    }
}
