//! The ingestion stages, in run order.

pub mod concepts;
pub mod directories;
pub mod entry_points;
pub mod features;
pub mod metadata;

use prodigo_core::errors::StorageError;

use crate::paths::IngestPaths;

/// Project identity shared by every stage.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Value of the `project_path` columns.
    pub project_path: String,
    /// Final segment of the manifests directory, used in synthesized paths.
    pub app_dir: String,
}

impl ProjectContext {
    pub fn from_paths(paths: &IngestPaths) -> Self {
        Self {
            project_path: paths.project_path(),
            app_dir: paths.app_dir(),
        }
    }
}

/// Serialize a column payload to compact JSON.
pub(crate) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization {
        message: e.to_string(),
    })
}
