//! Stage 4b: the analyzer's output directories.

use prodigo_core::constants::{DirectoryFileCount, KEY_DIRECTORIES, OUTPUT_ROOT};
use prodigo_core::errors::StorageError;
use prodigo_storage::queries::key_directories::{upsert_key_directories, KeyDirectoryRow};
use prodigo_storage::IngestDatabase;

use super::ProjectContext;

/// One row per known directory. Ids are `<project_path>::<directory_path>`
/// so re-runs replace rather than duplicate.
pub fn build_key_directory_rows(ctx: &ProjectContext, rule_count: usize) -> Vec<KeyDirectoryRow> {
    KEY_DIRECTORIES
        .iter()
        .map(|dir| {
            let directory_path = format!("{OUTPUT_ROOT}/{}/{}", dir.name, ctx.app_dir);
            let file_count = match dir.file_count {
                DirectoryFileCount::PerRule => rule_count as i64,
                DirectoryFileCount::Fixed(n) => n,
            };
            KeyDirectoryRow {
                id: format!("{}::{directory_path}", ctx.project_path),
                project_path: ctx.project_path.clone(),
                directory_path,
                directory_type: dir.directory_type.to_string(),
                file_count,
                description: dir.description.to_string(),
            }
        })
        .collect()
}

pub fn populate_key_directories(
    db: &IngestDatabase,
    ctx: &ProjectContext,
    rule_count: usize,
) -> Result<usize, StorageError> {
    let rows = build_key_directory_rows(ctx, rule_count);
    let count = db.with_transaction(|tx| upsert_key_directories(tx, &rows))?;
    tracing::info!(count, "inserted key directories");
    Ok(count)
}
