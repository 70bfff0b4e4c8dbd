//! `pipeline-summary.json`.

use serde::{Deserialize, Serialize};

/// Summary document written by the analyzer at the end of its run.
/// Only the application id is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineSummary {
    #[serde(rename = "applicationId", default)]
    pub application_id: Option<String>,
}

impl PipelineSummary {
    /// Application id, or `fallback` (the manifests directory name) when
    /// the summary carries none.
    pub fn application_id_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.application_id.as_deref().unwrap_or(fallback)
    }
}
