//! IngestErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string that the
/// CLI prints alongside the message.
pub trait IngestErrorCode {
    /// Returns the error code string (e.g., "RULES_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MANIFESTS_NOT_FOUND: &str = "MANIFESTS_NOT_FOUND";
pub const RULES_NOT_FOUND: &str = "RULES_NOT_FOUND";
pub const INPUT_IO: &str = "INPUT_IO";
pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MISSING_TABLE: &str = "MISSING_TABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
