//! JSON file format: one top-level array of strings, no envelope.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::StorageError;

/// Read the entries stored at `path`.
pub fn read_entries(path: &Path) -> Result<Vec<String>, StorageError> {
    let content = std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StorageError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => StorageError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    serde_json::from_slice(&content).map_err(|e| StorageError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Write `entries` to `path`, replacing any existing file.
pub fn write_entries(path: &Path, entries: &[String]) -> Result<(), StorageError> {
    let io_err = |source: io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, entries).map_err(|e| io_err(e.into()))?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Severity;

    #[test]
    fn writes_a_plain_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        write_entries(&path, &["a".to_string(), "b \"quoted\"".to_string()]).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, r#"["a","b \"quoted\""]"#);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        write_entries(&path, &["one".to_string(), "two".to_string()]).unwrap();
        write_entries(&path, &["three".to_string()]).unwrap();
        assert_eq!(read_entries(&path).unwrap(), vec!["three".to_string()]);
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_entries(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StorageError::FileNotFound { .. }));
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn wrong_shape_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [
            ("garbage.json", "not json"),
            ("object.json", r#"{"history": []}"#),
            ("numbers.json", "[1, 2, 3]"),
            ("truncated.json", r#"["(1+1j) conj"#),
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, body).unwrap();
            let err = read_entries(&path).unwrap_err();
            assert!(
                matches!(err, StorageError::Malformed { .. }),
                "{} should be malformed, got {:?}",
                name,
                err
            );
        }
    }

    #[test]
    fn invalid_utf8_is_malformed_not_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.json");
        std::fs::write(&path, [0xff, 0xfe, b'[']).unwrap();
        let err = read_entries(&path).unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }), "got {:?}", err);
        assert_eq!(err.severity(), Severity::Warning);
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("history.json");
        let err = write_entries(&path, &[]).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
        assert_eq!(err.severity(), Severity::Error);
    }
}
