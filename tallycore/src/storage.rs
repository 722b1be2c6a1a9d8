//! Config storage
//!
//! JSON files under the per-user config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Config directory for an app, e.g. `~/.config/tally` on Linux.
/// Falls back to the working directory when no home directory is known.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize to pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        width: f32,
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sample.json");
        let sample = Sample { name: "calc".into(), width: 510.0 };
        save_json(&path, &sample).unwrap();
        assert!(path.exists());
        assert_eq!(load_json::<Sample>(&path).unwrap(), sample);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json::<Sample>(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_config_dir_names_app() {
        let dir = config_dir("tally");
        assert!(dir.to_string_lossy().contains("tally") || dir == PathBuf::from("."));
    }
}
