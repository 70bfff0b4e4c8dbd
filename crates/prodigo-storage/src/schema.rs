//! Destination table checks.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// Tables the ingester writes to. They are created by In-Memoria.
pub const REQUIRED_TABLES: &[&str] = &[
    "project_metadata",
    "semantic_concepts",
    "feature_map",
    "entry_points",
    "key_directories",
];

/// Fail with `MissingTable` for the first required table that does not
/// exist. Read-only.
pub fn verify_tables(conn: &Connection) -> Result<(), StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1")
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    for table in REQUIRED_TABLES {
        let found: Option<String> = stmt
            .query_row(params![table], |row| row.get(0))
            .optional()
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        if found.is_none() {
            return Err(StorageError::MissingTable {
                table: (*table).to_string(),
            });
        }
    }
    Ok(())
}
