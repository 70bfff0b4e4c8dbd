//! project_metadata table queries.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadataRow {
    pub project_id: String,
    pub project_path: String,
    pub project_name: String,
    pub language_primary: String,
    pub languages_detected: String, // JSON array
    pub framework_detected: String,
    pub intelligence_version: String,
    /// Set by SQLite on write; ignored by `upsert_project_metadata`.
    pub last_full_scan: Option<String>,
}

/// Insert or replace the project row. `last_full_scan` is stamped with
/// `datetime('now')`.
pub fn upsert_project_metadata(
    conn: &Connection,
    row: &ProjectMetadataRow,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO project_metadata
         (project_id, project_path, project_name, language_primary, languages_detected,
          framework_detected, intelligence_version, last_full_scan)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, datetime('now'))",
        params![
            row.project_id,
            row.project_path,
            row.project_name,
            row.language_primary,
            row.languages_detected,
            row.framework_detected,
            row.intelligence_version,
        ],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

pub fn get_project_metadata(
    conn: &Connection,
    project_id: &str,
) -> Result<Option<ProjectMetadataRow>, StorageError> {
    conn.query_row(
        "SELECT project_id, project_path, project_name, language_primary, languages_detected,
                framework_detected, intelligence_version, last_full_scan
         FROM project_metadata WHERE project_id = ?1",
        params![project_id],
        |row| {
            Ok(ProjectMetadataRow {
                project_id: row.get(0)?,
                project_path: row.get(1)?,
                project_name: row.get(2)?,
                language_primary: row.get(3)?,
                languages_detected: row.get(4)?,
                framework_detected: row.get(5)?,
                intelligence_version: row.get(6)?,
                last_full_scan: row.get(7)?,
            })
        },
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn count_project_metadata(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM project_metadata", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
