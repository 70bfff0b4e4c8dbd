//! Tests for the JSON / JSONL artifact readers.

use prodigo_core::errors::{IngestErrorCode, InputError};
use prodigo_core::io::{load_json, load_jsonl};
use prodigo_core::types::{EdgeRecord, NodeRecord, PipelineSummary};
use tempfile::TempDir;

#[test]
fn test_jsonl_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nodes.jsonl");
    std::fs::write(
        &path,
        "{\"id\":\"a\",\"ruleName\":\"A\"}\n\n   \n{\"id\":\"b\",\"kind\":\"rule\"}\n",
    )
    .unwrap();

    let nodes: Vec<NodeRecord> = load_jsonl(&path).unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].rule_name.as_deref(), Some("A"));
    assert_eq!(nodes[1].rule_name, None);
}

#[test]
fn test_jsonl_reports_line_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.jsonl");
    std::fs::write(
        &path,
        "{\"src\":\"a\",\"dst\":\"b\",\"type\":\"calls\"}\n\n{\"src\":\"a\",\n",
    )
    .unwrap();

    let err = load_jsonl::<EdgeRecord>(&path).unwrap_err();
    match &err {
        InputError::Malformed { line, .. } => assert_eq!(*line, 3),
        other => panic!("expected Malformed, got {other:?}"),
    }
    assert_eq!(err.error_code(), "MALFORMED_INPUT");
}

#[test]
fn test_jsonl_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_jsonl::<EdgeRecord>(&dir.path().join("missing.jsonl")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn test_edge_confidence_defaults_to_unknown() {
    let edge: EdgeRecord =
        serde_json::from_str(r#"{"src":"a","dst":"b","type":"calls"}"#).unwrap();
    assert_eq!(edge.confidence_label(), "Unknown");

    let edge: EdgeRecord =
        serde_json::from_str(r#"{"src":"a","dst":"b","type":"calls","confidence":"High"}"#)
            .unwrap();
    assert_eq!(edge.confidence_label(), "High");
}

#[test]
fn test_summary_application_id_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline-summary.json");

    std::fs::write(&path, r#"{"applicationId":"WRBank","rules":120}"#).unwrap();
    let summary: PipelineSummary = load_json(&path).unwrap();
    assert_eq!(summary.application_id_or("WRBank::01.01.01"), "WRBank");

    std::fs::write(&path, r#"{"rules":120}"#).unwrap();
    let summary: PipelineSummary = load_json(&path).unwrap();
    assert_eq!(summary.application_id_or("WRBank::01.01.01"), "WRBank::01.01.01");
}
