//! Shared constants: artifact file names, rule-type markers, the concept
//! classification table, and the fixed labels written to the database.

// ---- Input artifacts ----

pub const RULES_FILE: &str = "rules.jsonl";
pub const SUMMARY_FILE: &str = "pipeline-summary.json";
pub const EDGES_FILE: &str = "edges.jsonl";
pub const NODES_FILE: &str = "nodes.jsonl";

/// Project-level config file looked up inside the manifests directory.
pub const CONFIG_FILE_NAME: &str = "prodigo.toml";

// ---- Database defaults ----

/// Database file created by In-Memoria inside the manifests directory.
pub const DEFAULT_DB_FILE_NAME: &str = "in-memoria.db";

/// Default SQLite busy timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

// ---- Rule-type markers ----

/// Rule type of process-flow rules. Also matched as a substring of graph
/// node ids when grouping dependency edges.
pub const WORKFLOW_MARKER: &str = "Rule-Obj-Flow";

/// Rule type of portal rules.
pub const PORTAL_MARKER: &str = "Rule-Portal";

/// Case-insensitive substring that promotes a workflow to an entry point.
pub const MAIN_WORKFLOW_HINT: &str = "main";

// ---- Classification ----

/// Concept type for rule types absent from [`CONCEPT_TYPES`].
pub const DEFAULT_CONCEPT_TYPE: &str = "rule";

/// Rule type to semantic concept type.
pub const CONCEPT_TYPES: &[(&str, &str)] = &[
    ("Rule-Obj-Flow", "workflow"),
    ("Rule-Obj-FlowAction", "action"),
    ("Rule-Obj-Property", "property"),
    ("Rule-Obj-Model", "data_transform"),
    ("Rule-HTML-Section", "ui_component"),
    ("Rule-HTML-Harness", "ui_component"),
    ("Rule-Portal", "portal"),
    ("Rule-Declare-Pages", "data_page"),
    ("Rule-Obj-Report-Definition", "report"),
    ("Rule-Declare-DecisionTable", "decision"),
    ("Rule-Declare-Expressions", "expression"),
    ("Rule-Obj-When", "condition"),
    ("Rule-Access-When", "condition"),
    ("Rule-Obj-Activity", "activity"),
    ("Rule-Obj-Corr", "correspondence"),
    ("Rule-Notification", "notification"),
    ("Rule-Connect-SQL", "connector"),
];

/// Rules are exported facts, not inferences.
pub const CONCEPT_CONFIDENCE: f64 = 1.0;

/// Returns the concept type for a rule type, falling back to
/// [`DEFAULT_CONCEPT_TYPE`].
pub fn concept_type_for(rule_type: &str) -> &'static str {
    CONCEPT_TYPES
        .iter()
        .find(|(ty, _)| *ty == rule_type)
        .map(|(_, concept)| *concept)
        .unwrap_or(DEFAULT_CONCEPT_TYPE)
}

// ---- Project metadata labels ----

pub const LANGUAGE_PRIMARY: &str = "Pega";
pub const LANGUAGES_DETECTED: &[&str] = &["Pega", "XML", "JSONL"];
pub const FRAMEWORK_DETECTED: &str = "Pega Platform";
pub const INTELLIGENCE_VERSION: &str = "1.0.0";

// ---- Feature / entry-point labels ----

pub const FEATURE_STATUS_ACTIVE: &str = "active";

/// Confidence label for edges that carry none.
pub const DEFAULT_EDGE_CONFIDENCE: &str = "Unknown";

pub const ENTRY_POINT_FRAMEWORK: &str = "Pega";

// ---- Key directories ----

/// Root label of the analyzer's output tree.
pub const OUTPUT_ROOT: &str = "prodigo-output";

/// How a key directory's file count is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryFileCount {
    /// One exported XML file per rule.
    PerRule,
    /// Approximate fixed count.
    Fixed(i64),
}

/// A known directory of the analyzer's output tree.
#[derive(Debug, Clone, Copy)]
pub struct KeyDirectory {
    pub name: &'static str,
    pub description: &'static str,
    pub directory_type: &'static str,
    pub file_count: DirectoryFileCount,
}

pub const KEY_DIRECTORIES: &[KeyDirectory] = &[
    KeyDirectory {
        name: "xml",
        description: "Raw Pega rule XML exports",
        directory_type: "source",
        file_count: DirectoryFileCount::PerRule,
    },
    KeyDirectory {
        name: "manifests",
        description: "Processed rule metadata and summaries",
        directory_type: "config",
        file_count: DirectoryFileCount::Fixed(10),
    },
    KeyDirectory {
        name: "graph",
        description: "Dependency graph data",
        directory_type: "data",
        file_count: DirectoryFileCount::Fixed(5),
    },
];

/// Synthesized path of a rule's XML export, relative to the output root.
pub fn rule_xml_path(app_dir: &str, rule_type: &str, rule_name: &str) -> String {
    format!("xml/{app_dir}/{rule_type}/{rule_name}.xml")
}
