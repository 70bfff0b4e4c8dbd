//! Input artifact errors.

use std::path::PathBuf;

use super::error_code::{self, IngestErrorCode};

/// Errors raised while locating or reading the analyzer's output files.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Manifests directory not found: {path}")]
    ManifestsDirNotFound { path: PathBuf },

    #[error("rules.jsonl not found in {dir}")]
    RulesFileNotFound { dir: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed record in {path} at line {line}: {message}")]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl IngestErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ManifestsDirNotFound { .. } => error_code::MANIFESTS_NOT_FOUND,
            Self::RulesFileNotFound { .. } => error_code::RULES_NOT_FOUND,
            Self::Io { .. } => error_code::INPUT_IO,
            Self::Malformed { .. } => error_code::MALFORMED_INPUT,
        }
    }
}
