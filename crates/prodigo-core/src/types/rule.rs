//! Rule records from `rules.jsonl`.

use serde::{Deserialize, Serialize};

use super::EntryType;
use crate::constants::{
    concept_type_for, rule_xml_path, MAIN_WORKFLOW_HINT, PORTAL_MARKER, WORKFLOW_MARKER,
};

/// A reference from one rule to another, as exported by the analyzer.
/// Every field may be absent; absent fields serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "type", default)]
    pub ref_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "class", default)]
    pub class: Option<String>,
}

/// One exported business rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub rule_id: String,
    #[serde(rename = "ruleName")]
    pub rule_name: String,
    #[serde(rename = "ruleType")]
    pub rule_type: String,
    #[serde(rename = "appliesTo")]
    pub applies_to: String,
    pub ruleset: String,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl RuleRecord {
    /// Semantic concept type derived from the rule type.
    pub fn concept_type(&self) -> &'static str {
        concept_type_for(&self.rule_type)
    }

    /// Entry-point classification, if the rule is one.
    pub fn entry_type(&self) -> Option<EntryType> {
        if self.rule_type == PORTAL_MARKER {
            Some(EntryType::Web)
        } else if self.rule_type == WORKFLOW_MARKER
            && self.rule_name.to_lowercase().contains(MAIN_WORKFLOW_HINT)
        {
            Some(EntryType::Workflow)
        } else {
            None
        }
    }

    /// Synthesized XML export path for this rule.
    pub fn xml_path(&self, app_dir: &str) -> String {
        rule_xml_path(app_dir, &self.rule_type, &self.rule_name)
    }
}
