//! Dependency graph records from `edges.jsonl` and `nodes.jsonl`.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EDGE_CONFIDENCE;

/// A directed dependency between two graph nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dst: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default)]
    pub confidence: Option<String>,
}

impl EdgeRecord {
    /// Confidence label, `"Unknown"` when the analyzer gave none.
    pub fn confidence_label(&self) -> &str {
        self.confidence.as_deref().unwrap_or(DEFAULT_EDGE_CONFIDENCE)
    }
}

/// A graph node. Only the id and display name are consumed; other
/// attributes are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(rename = "ruleName", default)]
    pub rule_name: Option<String>,
}
