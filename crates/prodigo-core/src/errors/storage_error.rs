//! Storage-layer errors for SQLite operations.

use super::error_code::{self, IngestErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Destination table missing: {table} (schema is managed externally)")]
    MissingTable { table: String },

    #[error("Failed to serialize column payload: {message}")]
    Serialization { message: String },
}

impl IngestErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTable { .. } => error_code::MISSING_TABLE,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
