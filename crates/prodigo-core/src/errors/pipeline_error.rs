//! Pipeline errors.

use super::error_code::IngestErrorCode;
use super::{ConfigError, InputError, StorageError};

/// Errors that abort an ingestion run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PipelineError {
    /// True for the pre-flight failures that are reported before the
    /// database is opened.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::Input(InputError::ManifestsDirNotFound { .. })
                | Self::Input(InputError::RulesFileNotFound { .. })
        )
    }
}

impl IngestErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
