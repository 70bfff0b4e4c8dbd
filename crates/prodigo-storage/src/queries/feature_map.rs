//! feature_map table queries.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// One workflow and its outbound dependencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub id: String,
    pub project_path: String,
    pub feature_name: String,
    pub primary_files: String, // JSON array
    pub related_files: String, // JSON array
    pub dependencies: String,  // JSON array
    pub status: String,
}

pub fn upsert_features(conn: &Connection, rows: &[FeatureRow]) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR REPLACE INTO feature_map
             (id, project_path, feature_name, primary_files, related_files, dependencies, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut count = 0;
    for row in rows {
        stmt.execute(params![
            row.id,
            row.project_path,
            row.feature_name,
            row.primary_files,
            row.related_files,
            row.dependencies,
            row.status,
        ])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        count += 1;
    }
    Ok(count)
}

pub fn get_feature(conn: &Connection, id: &str) -> Result<Option<FeatureRow>, StorageError> {
    conn.query_row(
        "SELECT id, project_path, feature_name, primary_files, related_files, dependencies, status
         FROM feature_map WHERE id = ?1",
        params![id],
        |row| {
            Ok(FeatureRow {
                id: row.get(0)?,
                project_path: row.get(1)?,
                feature_name: row.get(2)?,
                primary_files: row.get(3)?,
                related_files: row.get(4)?,
                dependencies: row.get(5)?,
                status: row.get(6)?,
            })
        },
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn count_features(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM feature_map", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
