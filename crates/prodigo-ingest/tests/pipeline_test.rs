//! End-to-end runs against a fixture output tree and database.

mod common;

use common::{count, dump_table, Fixture};
use prodigo_core::config::IngestConfig;
use prodigo_core::errors::{InputError, PipelineError, StorageError};
use prodigo_ingest::{run, IngestPaths};

const TABLES: &[(&str, &str)] = &[
    (
        "project_metadata",
        "project_id, project_path, project_name, language_primary, languages_detected, framework_detected, intelligence_version",
    ),
    (
        "semantic_concepts",
        "id, concept_name, concept_type, confidence_score, relationships, file_path, line_range",
    ),
    (
        "feature_map",
        "id, project_path, feature_name, primary_files, related_files, dependencies, status",
    ),
    (
        "entry_points",
        "id, project_path, entry_type, file_path, description, framework",
    ),
    (
        "key_directories",
        "id, project_path, directory_path, directory_type, file_count, description",
    ),
];

fn run_fixture(fixture: &Fixture) -> Result<prodigo_ingest::IngestSummary, PipelineError> {
    let config = IngestConfig::default();
    let paths = IngestPaths::new(&fixture.manifests_dir, &config);
    run(&paths, &config)
}

#[test]
fn test_full_run_populates_every_table() {
    let fixture = Fixture::new();
    let summary = run_fixture(&fixture).unwrap();

    assert_eq!(summary.project_id, "WRBank");
    assert!(summary.features_mapped);
    assert_eq!(summary.concepts, 5);
    assert_eq!(summary.features, 2);
    assert_eq!(summary.entry_points, 2);
    assert_eq!(summary.key_directories, 3);
    assert_eq!(summary.db_path, fixture.db_path());

    let conn = fixture.open_db();
    assert_eq!(count(&conn, "project_metadata"), 1);
    let (path, scanned): (String, Option<String>) = conn
        .query_row(
            "SELECT project_path, last_full_scan FROM project_metadata WHERE project_id = 'WRBank'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(path, fixture.manifests_dir.display().to_string());
    assert!(scanned.is_some());
}

#[test]
fn test_rerun_is_idempotent() {
    let fixture = Fixture::new();
    run_fixture(&fixture).unwrap();
    let conn = fixture.open_db();
    let before: Vec<_> = TABLES
        .iter()
        .map(|(table, cols)| dump_table(&conn, table, cols))
        .collect();

    run_fixture(&fixture).unwrap();
    let after: Vec<_> = TABLES
        .iter()
        .map(|(table, cols)| dump_table(&conn, table, cols))
        .collect();

    assert_eq!(before, after);
    assert_eq!(count(&conn, "key_directories"), 3);
}

#[test]
fn test_missing_graph_skips_features_only() {
    let fixture = Fixture::new();
    fixture.remove_graph();

    let summary = run_fixture(&fixture).unwrap();
    assert!(!summary.features_mapped);
    assert_eq!(summary.features, 0);
    assert_eq!(summary.concepts, 5);
    assert_eq!(summary.entry_points, 2);
    assert_eq!(summary.key_directories, 3);

    let conn = fixture.open_db();
    assert_eq!(count(&conn, "feature_map"), 0);
    assert_eq!(count(&conn, "project_metadata"), 1);
}

#[test]
fn test_missing_rules_file_writes_nothing() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.manifests_dir.join("rules.jsonl")).unwrap();

    let err = run_fixture(&fixture).unwrap_err();
    assert!(err.is_preflight());
    assert!(matches!(
        err,
        PipelineError::Input(InputError::RulesFileNotFound { .. })
    ));

    let conn = fixture.open_db();
    for (table, _) in TABLES {
        assert_eq!(count(&conn, table), 0, "{table}");
    }
}

#[test]
fn test_missing_manifests_dir_is_preflight_error() {
    let fixture = Fixture::new();
    let config = IngestConfig::default();
    let paths = IngestPaths::new(&fixture.manifests_dir.join("nope"), &config);

    let err = run(&paths, &config).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Input(InputError::ManifestsDirNotFound { .. })
    ));
}

#[test]
fn test_malformed_rules_abort_before_any_write() {
    let fixture = Fixture::new();
    std::fs::write(
        fixture.manifests_dir.join("rules.jsonl"),
        "{\"rule_id\":\"R1\",\"ruleName\":\"A\"}\n",
    )
    .unwrap();

    let err = run_fixture(&fixture).unwrap_err();
    assert!(!err.is_preflight());
    assert!(matches!(
        err,
        PipelineError::Input(InputError::Malformed { line: 1, .. })
    ));
    assert_eq!(count(&fixture.open_db(), "project_metadata"), 0);
}

#[test]
fn test_malformed_edges_keep_earlier_stages() {
    let fixture = Fixture::new();
    std::fs::write(fixture.graph_dir.join("edges.jsonl"), "not json\n").unwrap();

    let err = run_fixture(&fixture).unwrap_err();
    assert!(matches!(err, PipelineError::Input(InputError::Malformed { .. })));

    let conn = fixture.open_db();
    assert_eq!(count(&conn, "project_metadata"), 1);
    assert_eq!(count(&conn, "semantic_concepts"), 5);
    assert_eq!(count(&conn, "feature_map"), 0);
    assert_eq!(count(&conn, "entry_points"), 0);
}

#[test]
fn test_missing_database_is_not_created() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.db_path()).unwrap();

    let err = run_fixture(&fixture).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Storage(StorageError::SqliteError { .. })
    ));
    assert!(!fixture.db_path().exists());
}

#[test]
fn test_explicit_graph_dir_override() {
    let fixture = Fixture::new();
    let moved = fixture.root.path().join("elsewhere");
    std::fs::rename(&fixture.graph_dir, &moved).unwrap();

    let config = IngestConfig {
        graph: prodigo_core::config::GraphConfig { dir: Some(moved) },
        ..Default::default()
    };
    let paths = IngestPaths::new(&fixture.manifests_dir, &config);
    let summary = run(&paths, &config).unwrap();
    assert!(summary.features_mapped);
    assert_eq!(summary.features, 2);
}
