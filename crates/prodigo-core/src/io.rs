//! JSON and JSON-lines readers for the analyzer's artifacts.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::InputError;

/// Load a JSONL file, one record per non-blank line.
///
/// Parse failures report the 1-based line number.
pub fn load_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut items = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|e| InputError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            message: e.to_string(),
        })?;
        items.push(item);
    }

    tracing::debug!(path = %path.display(), records = items.len(), "loaded jsonl");
    Ok(items)
}

/// Load a single JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| InputError::Malformed {
        path: path.to_path_buf(),
        line: e.line(),
        message: e.to_string(),
    })
}
