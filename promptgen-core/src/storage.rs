//! Persistence of a single prompt as a JSON file
//!
//! On-disk format is a UTF-8 JSON object with the single key `prompt`,
//! pretty-printed. Saves overwrite without confirmation; there is no
//! locking or atomic-write guarantee, acceptable for single-user,
//! single-session usage.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
struct PromptDocument {
    prompt: String,
}

/// Recoverable persistence failures, rendered as human-readable log lines
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("file '{0}' does not exist")]
    NotFound(PathBuf),
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("'{path}' is not valid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("'{0}' has no string 'prompt' key")]
    MissingPrompt(PathBuf),
}

/// Serialize the prompt to `{"prompt": <text>}` at the given path,
/// overwriting any existing file.
pub fn save_prompt<P: AsRef<Path>>(prompt: &str, path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    let document = PromptDocument {
        prompt: prompt.to_string(),
    };

    // to_string_pretty on a two-field struct cannot fail, but the error is
    // still mapped rather than unwrapped
    let content = serde_json::to_string_pretty(&document).map_err(|source| {
        StorageError::InvalidJson {
            path: path.to_path_buf(),
            source,
        }
    })?;

    std::fs::write(path, content).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the prompt string back from a file produced by [`save_prompt`].
///
/// Fails if the file is missing, is not valid JSON, or lacks a string
/// `prompt` key. The stored prompt may be empty.
pub fn load_prompt<P: AsRef<Path>>(path: P) -> Result<String, StorageError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(StorageError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| StorageError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    match value.get("prompt") {
        Some(Value::String(prompt)) => Ok(prompt.clone()),
        _ => Err(StorageError::MissingPrompt(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_writes_pretty_single_key_object() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("prompt.json");

        save_prompt("Write a short response.", &path).expect("save should succeed");

        let content = std::fs::read_to_string(&path).expect("file should exist");
        assert_eq!(
            content,
            "{\n  \"prompt\": \"Write a short response.\"\n}"
        );
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("prompt.json");

        save_prompt("first", &path).expect("first save");
        save_prompt("second", &path).expect("second save");

        assert_eq!(load_prompt(&path).expect("load"), "second");
    }
}
