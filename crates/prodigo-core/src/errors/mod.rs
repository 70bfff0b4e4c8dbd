//! Error handling for the ingester.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod pipeline_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::IngestErrorCode;
pub use input_error::InputError;
pub use pipeline_error::PipelineError;
pub use storage_error::StorageError;
