//! Shared fixture: a Prodigo output tree plus an In-Memoria database.

#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

pub const SCHEMA_SQL: &str = include_str!("../../../../test-fixtures/in-memoria/schema.sql");

pub const APP_DIR: &str = "WRBank::01.01.01";

pub const RULES_JSONL: &str = r#"{"rule_id":"RULE-OBJ-FLOW WR-BANK-WORK MAINAPPROVALFLOW","ruleName":"MainApprovalFlow","ruleType":"Rule-Obj-Flow","appliesTo":"WR-Bank-Work","ruleset":"WRBank","references":[{"type":"Rule-Obj-Activity","name":"SaveLoan","class":"WR-Bank-Work"},{"type":"Rule-Obj-FlowAction","name":"Approve"}]}
{"rule_id":"RULE-OBJ-FLOW WR-BANK-WORK APPROVALFLOW","ruleName":"ApprovalFlow","ruleType":"Rule-Obj-Flow","appliesTo":"WR-Bank-Work","ruleset":"WRBank"}

{"rule_id":"RULE-PORTAL LOANOFFICER","ruleName":"LoanOfficer","ruleType":"Rule-Portal","appliesTo":"Data-Portal","ruleset":"WRBank","references":[]}
{"rule_id":"RULE-OBJ-PROPERTY WR-BANK-WORK AMOUNT","ruleName":"Amount","ruleType":"Rule-Obj-Property","appliesTo":"WR-Bank-Work","ruleset":"WRBank"}
{"rule_id":"RULE-CUSTOM WR-BANK-WORK THING","ruleName":"MainThing","ruleType":"Rule-Custom","appliesTo":"WR-Bank-Work","ruleset":"WRBank"}
"#;

pub const SUMMARY_JSON: &str = r#"{"applicationId":"WRBank","rulesProcessed":5}"#;

pub const NODES_JSONL: &str = r#"{"id":"WRBank.Rule-Obj-Flow.MainApprovalFlow","ruleName":"MainApprovalFlow","ruleType":"Rule-Obj-Flow"}
{"id":"WRBank.Rule-Obj-Activity.SaveLoan","ruleName":"SaveLoan"}
"#;

pub const EDGES_JSONL: &str = r#"{"src":"WRBank.Rule-Obj-Flow.MainApprovalFlow","dst":"WRBank.Rule-Obj-Activity.SaveLoan","type":"calls","confidence":"High"}
{"src":"WRBank.Rule-Obj-Flow.ReviewFlow","dst":"WRBank.Rule-Obj-FlowAction.Approve","type":"uses"}
{"src":"WRBank.Rule-Obj-Flow.MainApprovalFlow","dst":"WRBank.Rule-Obj-Flow.ReviewFlow","type":"subflow","confidence":"Medium"}
{"src":"WRBank.Rule-Obj-Flow.MainApprovalFlow","dst":"WRBank.Rule-Obj-Activity.SaveLoan","type":"calls","confidence":"Low"}
{"src":"WRBank.Rule-Obj-Activity.SaveLoan","dst":"WRBank.Rule-Obj-Property.Amount","type":"reads"}
"#;

/// `<tmp>/prodigo-output/{manifests,graph}/<APP_DIR>` with every artifact
/// and a database carrying the In-Memoria tables.
pub struct Fixture {
    pub root: TempDir,
    pub manifests_dir: PathBuf,
    pub graph_dir: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let base = root.path().join("prodigo-output");
        let manifests_dir = base.join("manifests").join(APP_DIR);
        let graph_dir = base.join("graph").join(APP_DIR);
        std::fs::create_dir_all(&manifests_dir).unwrap();
        std::fs::create_dir_all(&graph_dir).unwrap();

        std::fs::write(manifests_dir.join("rules.jsonl"), RULES_JSONL).unwrap();
        std::fs::write(manifests_dir.join("pipeline-summary.json"), SUMMARY_JSON).unwrap();
        std::fs::write(graph_dir.join("edges.jsonl"), EDGES_JSONL).unwrap();
        std::fs::write(graph_dir.join("nodes.jsonl"), NODES_JSONL).unwrap();

        Connection::open(manifests_dir.join("in-memoria.db"))
            .unwrap()
            .execute_batch(SCHEMA_SQL)
            .unwrap();

        // Canonical form, matching what the ingester stores.
        let manifests_dir = std::fs::canonicalize(&manifests_dir).unwrap();
        let graph_dir = std::fs::canonicalize(&graph_dir).unwrap();
        Self {
            root,
            manifests_dir,
            graph_dir,
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.manifests_dir.join("in-memoria.db")
    }

    pub fn remove_graph(&self) {
        std::fs::remove_dir_all(&self.graph_dir).unwrap();
    }

    pub fn open_db(&self) -> Connection {
        Connection::open(self.db_path()).unwrap()
    }
}

/// Every row of `table` as strings, ordered by `id`, excluding timestamp
/// columns.
pub fn dump_table(conn: &Connection, table: &str, columns: &str) -> Vec<Vec<String>> {
    let sql = format!("SELECT {columns} FROM {table} ORDER BY 1");
    let mut stmt = conn.prepare(&sql).unwrap();
    let width = stmt.column_count();
    let rows: Vec<Vec<String>> = stmt
        .query_map([], |row| {
            (0..width)
                .map(|i| {
                    let value: rusqlite::types::Value = row.get(i)?;
                    Ok(format!("{value:?}"))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .unwrap()
        .map(Result::unwrap)
        .collect();
    rows
}

pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}
