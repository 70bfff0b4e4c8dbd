//! Dependency graph location.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GraphConfig {
    /// Explicit graph directory. When unset, the sibling
    /// `<manifests>/../../graph/<app-dir>` is used.
    pub dir: Option<PathBuf>,
}

impl GraphConfig {
    /// Resolve the graph directory for a manifests directory laid out as
    /// `<root>/manifests/<app-dir>`.
    pub fn effective_dir(&self, manifests_dir: &Path) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        let app_dir = manifests_dir.file_name().unwrap_or_default();
        let root = manifests_dir
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        root.join("graph").join(app_dir)
    }
}
