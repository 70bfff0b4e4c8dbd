//! entry_points table queries.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPointRow {
    pub id: String,
    pub project_path: String,
    pub entry_type: String,
    pub file_path: String,
    pub description: String,
    pub framework: String,
}

pub fn upsert_entry_points(
    conn: &Connection,
    rows: &[EntryPointRow],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR REPLACE INTO entry_points
             (id, project_path, entry_type, file_path, description, framework)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut count = 0;
    for row in rows {
        stmt.execute(params![
            row.id,
            row.project_path,
            row.entry_type,
            row.file_path,
            row.description,
            row.framework,
        ])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        count += 1;
    }
    Ok(count)
}

/// All entry points of a project, ordered by id.
pub fn get_entry_points_by_project(
    conn: &Connection,
    project_path: &str,
) -> Result<Vec<EntryPointRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, project_path, entry_type, file_path, description, framework
             FROM entry_points WHERE project_path = ?1 ORDER BY id",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map(params![project_path], |row| {
            Ok(EntryPointRow {
                id: row.get(0)?,
                project_path: row.get(1)?,
                entry_type: row.get(2)?,
                file_path: row.get(3)?,
                description: row.get(4)?,
                framework: row.get(5)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::SqliteError { message: e.to_string() })?);
    }
    Ok(result)
}

pub fn count_entry_points(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM entry_points", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
