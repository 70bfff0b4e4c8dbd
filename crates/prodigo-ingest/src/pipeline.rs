//! Orchestration of one ingestion run.

use std::path::PathBuf;

use prodigo_core::config::IngestConfig;
use prodigo_core::errors::PipelineError;
use prodigo_core::io::{load_json, load_jsonl};
use prodigo_core::types::{EdgeRecord, NodeRecord, PipelineSummary, RuleRecord};
use prodigo_storage::queries::{entry_points, feature_map, key_directories, semantic_concepts};
use prodigo_storage::IngestDatabase;

use crate::paths::IngestPaths;
use crate::stages::{self, ProjectContext};

/// Row counts read back from the database after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub project_id: String,
    pub db_path: PathBuf,
    /// False when the graph directory was missing and features were skipped.
    pub features_mapped: bool,
    pub concepts: i64,
    pub features: i64,
    pub entry_points: i64,
    pub key_directories: i64,
}

/// Run every stage in order.
///
/// Pre-flight failures (missing manifests directory or rule file) return
/// before the database is opened. Each stage commits on its own, so a
/// failure mid-run leaves earlier stages in place. The connection is
/// dropped on every return path.
pub fn run(paths: &IngestPaths, config: &IngestConfig) -> Result<IngestSummary, PipelineError> {
    paths.validate()?;

    let graph_available = paths.graph_available();
    if !graph_available {
        tracing::warn!(
            graph_dir = %paths.graph_dir.display(),
            "graph directory not found, feature map will not be populated"
        );
    }

    let rules: Vec<RuleRecord> = load_jsonl(&paths.rules_file())?;
    let summary: PipelineSummary = load_json(&paths.summary_file())?;

    tracing::info!(db = %paths.db_path.display(), "connecting");
    let db = IngestDatabase::open(&paths.db_path, config.database.effective_busy_timeout_ms())?;
    let ctx = ProjectContext::from_paths(paths);

    let project_id = stages::metadata::populate_project_metadata(&db, &ctx, &summary)?;
    stages::concepts::populate_semantic_concepts(&db, &ctx, &rules)?;

    if graph_available {
        let edges: Vec<EdgeRecord> = load_jsonl(&paths.edges_file())?;
        let nodes: Vec<NodeRecord> = load_jsonl(&paths.nodes_file())?;
        stages::features::populate_feature_map(&db, &ctx, &edges, &nodes)?;
    }

    stages::entry_points::populate_entry_points(&db, &ctx, &rules)?;
    stages::directories::populate_key_directories(&db, &ctx, rules.len())?;

    let conn = db.conn();
    let result = IngestSummary {
        project_id,
        db_path: paths.db_path.clone(),
        features_mapped: graph_available,
        concepts: semantic_concepts::count_semantic_concepts(conn)?,
        features: feature_map::count_features(conn)?,
        entry_points: entry_points::count_entry_points(conn)?,
        key_directories: key_directories::count_key_directories(conn)?,
    };

    db.close()?;
    Ok(result)
}
