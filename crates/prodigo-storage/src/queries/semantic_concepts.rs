//! semantic_concepts table queries.

use prodigo_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

/// A searchable concept derived from one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticConceptRow {
    pub id: String,
    pub concept_name: String,
    pub concept_type: String,
    pub confidence_score: f64,
    pub relationships: String, // JSON array
    pub file_path: String,
    /// JSON object of extra rule attributes. In-Memoria names the column
    /// `line_range`; rules have no line information.
    pub line_range: String,
}

/// Insert or replace concepts with one cached statement. Returns the
/// number of rows written.
pub fn upsert_semantic_concepts(
    conn: &Connection,
    rows: &[SemanticConceptRow],
) -> Result<usize, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "INSERT OR REPLACE INTO semantic_concepts
             (id, concept_name, concept_type, confidence_score, relationships, file_path, line_range)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut count = 0;
    for row in rows {
        stmt.execute(params![
            row.id,
            row.concept_name,
            row.concept_type,
            row.confidence_score,
            row.relationships,
            row.file_path,
            row.line_range,
        ])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        count += 1;
    }
    Ok(count)
}

pub fn get_semantic_concept(
    conn: &Connection,
    id: &str,
) -> Result<Option<SemanticConceptRow>, StorageError> {
    conn.query_row(
        "SELECT id, concept_name, concept_type, confidence_score, relationships, file_path, line_range
         FROM semantic_concepts WHERE id = ?1",
        params![id],
        |row| {
            Ok(SemanticConceptRow {
                id: row.get(0)?,
                concept_name: row.get(1)?,
                concept_type: row.get(2)?,
                confidence_score: row.get(3)?,
                relationships: row.get(4)?,
                file_path: row.get(5)?,
                line_range: row.get(6)?,
            })
        },
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn count_semantic_concepts(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM semantic_concepts", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
