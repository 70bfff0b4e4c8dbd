//! key_directories table queries.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyDirectoryRow {
    pub id: String,
    pub project_path: String,
    pub directory_path: String,
    pub directory_type: String,
    pub file_count: i64,
    pub description: String,
}

pub fn upsert_key_directories(
    conn: &Connection,
    rows: &[KeyDirectoryRow],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR REPLACE INTO key_directories
             (id, project_path, directory_path, directory_type, file_count, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut count = 0;
    for row in rows {
        stmt.execute(params![
            row.id,
            row.project_path,
            row.directory_path,
            row.directory_type,
            row.file_count,
            row.description,
        ])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        count += 1;
    }
    Ok(count)
}

/// All key directories of a project, ordered by directory path.
pub fn get_key_directories_by_project(
    conn: &Connection,
    project_path: &str,
) -> Result<Vec<KeyDirectoryRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, project_path, directory_path, directory_type, file_count, description
             FROM key_directories WHERE project_path = ?1 ORDER BY directory_path",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![project_path], |row| {
            Ok(KeyDirectoryRow {
                id: row.get(0)?,
                project_path: row.get(1)?,
                directory_path: row.get(2)?,
                directory_type: row.get(3)?,
                file_count: row.get(4)?,
                description: row.get(5)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::SqliteError { message: e.to_string() })?);
    }
    Ok(result)
}

pub fn count_key_directories(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM key_directories", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
