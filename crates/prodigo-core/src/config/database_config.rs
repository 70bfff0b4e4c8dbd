//! Destination database configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_DB_FILE_NAME};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file name, resolved inside the manifests directory.
    /// Default: `in-memoria.db`.
    pub file_name: Option<String>,
    /// SQLite busy timeout in milliseconds. Default: 5000.
    pub busy_timeout_ms: Option<u64>,
}

impl DatabaseConfig {
    pub fn effective_file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_DB_FILE_NAME)
    }

    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }
}
