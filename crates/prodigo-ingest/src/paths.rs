//! Input and output locations for one ingestion run.

use std::path::{Path, PathBuf};

use prodigo_core::config::IngestConfig;
use prodigo_core::constants::{EDGES_FILE, NODES_FILE, RULES_FILE, SUMMARY_FILE};
use prodigo_core::errors::InputError;

/// Resolved paths of a run. Built before anything is read.
#[derive(Debug, Clone)]
pub struct IngestPaths {
    pub manifests_dir: PathBuf,
    pub graph_dir: PathBuf,
    pub db_path: PathBuf,
}

impl IngestPaths {
    pub fn new(manifests_dir: &Path, config: &IngestConfig) -> Self {
        let manifests_dir = resolve_path(manifests_dir);
        let graph_dir = resolve_path(&config.graph_dir(&manifests_dir));
        let db_path = config.database_path(&manifests_dir);
        Self {
            manifests_dir,
            graph_dir,
            db_path,
        }
    }

    /// Pre-flight check: the manifests directory and its rule file must
    /// exist. Nothing is opened.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.manifests_dir.exists() {
            return Err(InputError::ManifestsDirNotFound {
                path: self.manifests_dir.clone(),
            });
        }
        if !self.rules_file().exists() {
            return Err(InputError::RulesFileNotFound {
                dir: self.manifests_dir.clone(),
            });
        }
        Ok(())
    }

    /// Final segment of the manifests directory, e.g. `WRBank::01.01.01`.
    pub fn app_dir(&self) -> String {
        self.manifests_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Manifests directory as stored in `project_path` columns.
    pub fn project_path(&self) -> String {
        self.manifests_dir.display().to_string()
    }

    pub fn rules_file(&self) -> PathBuf {
        self.manifests_dir.join(RULES_FILE)
    }

    pub fn summary_file(&self) -> PathBuf {
        self.manifests_dir.join(SUMMARY_FILE)
    }

    pub fn edges_file(&self) -> PathBuf {
        self.graph_dir.join(EDGES_FILE)
    }

    pub fn nodes_file(&self) -> PathBuf {
        self.graph_dir.join(NODES_FILE)
    }

    pub fn graph_available(&self) -> bool {
        self.graph_dir.exists()
    }
}

/// Canonicalize when the path exists, otherwise make it absolute against
/// the working directory.
pub fn resolve_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
