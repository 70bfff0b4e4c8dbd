//! Stage 2: one searchable concept per rule.

use prodigo_core::constants::CONCEPT_CONFIDENCE;
use prodigo_core::errors::StorageError;
use prodigo_core::types::RuleRecord;
use prodigo_storage::queries::semantic_concepts::{upsert_semantic_concepts, SemanticConceptRow};
use prodigo_storage::IngestDatabase;
use serde::Serialize;

use super::{to_json, ProjectContext};

/// Rule attributes without a dedicated column.
#[derive(Serialize)]
struct RuleAttributes<'a> {
    #[serde(rename = "appliesTo")]
    applies_to: &'a str,
    ruleset: &'a str,
}

pub fn build_concept_row(
    ctx: &ProjectContext,
    rule: &RuleRecord,
) -> Result<SemanticConceptRow, StorageError> {
    Ok(SemanticConceptRow {
        id: rule.rule_id.clone(),
        concept_name: rule.rule_name.clone(),
        concept_type: rule.concept_type().to_string(),
        confidence_score: CONCEPT_CONFIDENCE,
        relationships: to_json(&rule.references)?,
        file_path: rule.xml_path(&ctx.app_dir),
        line_range: to_json(&RuleAttributes {
            applies_to: &rule.applies_to,
            ruleset: &rule.ruleset,
        })?,
    })
}

pub fn populate_semantic_concepts(
    db: &IngestDatabase,
    ctx: &ProjectContext,
    rules: &[RuleRecord],
) -> Result<usize, StorageError> {
    let rows = rules
        .iter()
        .map(|rule| build_concept_row(ctx, rule))
        .collect::<Result<Vec<_>, _>>()?;

    let count = db.with_transaction(|tx| upsert_semantic_concepts(tx, &rows))?;
    tracing::info!(count, "inserted semantic concepts from rules");
    Ok(count)
}
