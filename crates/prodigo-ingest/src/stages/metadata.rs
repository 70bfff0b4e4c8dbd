//! Stage 1: project identity.

use prodigo_core::constants::{
    FRAMEWORK_DETECTED, INTELLIGENCE_VERSION, LANGUAGES_DETECTED, LANGUAGE_PRIMARY,
};
use prodigo_core::errors::StorageError;
use prodigo_core::types::PipelineSummary;
use prodigo_storage::queries::project_metadata::{upsert_project_metadata, ProjectMetadataRow};
use prodigo_storage::IngestDatabase;

use super::{to_json, ProjectContext};

pub fn build_project_row(
    ctx: &ProjectContext,
    summary: &PipelineSummary,
) -> Result<ProjectMetadataRow, StorageError> {
    let app_name = summary.application_id_or(&ctx.app_dir).to_string();
    Ok(ProjectMetadataRow {
        project_id: app_name.clone(),
        project_path: ctx.project_path.clone(),
        project_name: app_name,
        language_primary: LANGUAGE_PRIMARY.to_string(),
        languages_detected: to_json(LANGUAGES_DETECTED)?,
        framework_detected: FRAMEWORK_DETECTED.to_string(),
        intelligence_version: INTELLIGENCE_VERSION.to_string(),
        last_full_scan: None,
    })
}

/// Upsert the project row and return its id.
pub fn populate_project_metadata(
    db: &IngestDatabase,
    ctx: &ProjectContext,
    summary: &PipelineSummary,
) -> Result<String, StorageError> {
    let row = build_project_row(ctx, summary)?;
    db.with_transaction(|tx| upsert_project_metadata(tx, &row))?;
    tracing::info!(project_id = %row.project_id, "inserted project metadata");
    Ok(row.project_id)
}
