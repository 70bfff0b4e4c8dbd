//! Stage 4a: portals and main workflows.

use prodigo_core::constants::ENTRY_POINT_FRAMEWORK;
use prodigo_core::errors::StorageError;
use prodigo_core::types::RuleRecord;
use prodigo_storage::queries::entry_points::{upsert_entry_points, EntryPointRow};
use prodigo_storage::IngestDatabase;

use super::ProjectContext;

/// Entry-point row for `rule`, or None when the rule is not one.
pub fn build_entry_point_row(ctx: &ProjectContext, rule: &RuleRecord) -> Option<EntryPointRow> {
    let entry_type = rule.entry_type()?;
    Some(EntryPointRow {
        id: rule.rule_id.clone(),
        project_path: ctx.project_path.clone(),
        entry_type: entry_type.as_str().to_string(),
        file_path: rule.xml_path(&ctx.app_dir),
        description: format!("{}: {} ({})", rule.rule_type, rule.rule_name, rule.applies_to),
        framework: ENTRY_POINT_FRAMEWORK.to_string(),
    })
}

pub fn populate_entry_points(
    db: &IngestDatabase,
    ctx: &ProjectContext,
    rules: &[RuleRecord],
) -> Result<usize, StorageError> {
    let rows: Vec<EntryPointRow> = rules
        .iter()
        .filter_map(|rule| build_entry_point_row(ctx, rule))
        .collect();

    let count = db.with_transaction(|tx| upsert_entry_points(tx, &rows))?;
    tracing::info!(count, "inserted entry points");
    Ok(count)
}
