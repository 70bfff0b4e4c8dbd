//! PRAGMA configuration applied to the connection.
//!
//! The database file is owned by In-Memoria, so only connection-scoped
//! pragmas are set; journal mode and vacuum settings are left untouched.

use prodigo_core::errors::StorageError;
use rusqlite::Connection;

/// Apply busy timeout and temp-store pragmas.
pub fn apply_pragmas(conn: &Connection, busy_timeout_ms: u64) -> Result<(), StorageError> {
    conn.execute_batch(&format!(
        "
        PRAGMA busy_timeout = {busy_timeout_ms};
        PRAGMA temp_store = MEMORY;
        "
    ))
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}
