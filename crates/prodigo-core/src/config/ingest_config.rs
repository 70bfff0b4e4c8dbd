//! Top-level ingester configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DatabaseConfig, GraphConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PRODIGO_*`)
/// 3. Config file (`--config`, else `prodigo.toml` in the manifests directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    pub database: DatabaseConfig,
    pub graph: GraphConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub graph_dir: Option<PathBuf>,
    pub db_file: Option<String>,
}

impl IngestConfig {
    /// Load configuration for a manifests directory.
    ///
    /// An explicit `config_file` must exist; the implicit project file is
    /// optional.
    pub fn load(
        manifests_dir: &Path,
        config_file: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_file {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = manifests_dir.join(CONFIG_FILE_NAME);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &IngestConfig) -> Result<(), ConfigError> {
        if config.database.busy_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "database.busy_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(name) = &config.database.file_name {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "database.file_name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Database path for a manifests directory. An absolute file name is
    /// used as-is.
    pub fn database_path(&self, manifests_dir: &Path) -> PathBuf {
        manifests_dir.join(self.database.effective_file_name())
    }

    /// Graph directory for a manifests directory.
    pub fn graph_dir(&self, manifests_dir: &Path) -> PathBuf {
        self.graph.effective_dir(manifests_dir)
    }

    fn merge_toml_file(config: &mut IngestConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: IngestConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only `Some` values in `other` override.
    fn merge(base: &mut IngestConfig, other: &IngestConfig) {
        if other.database.file_name.is_some() {
            base.database.file_name = other.database.file_name.clone();
        }
        if other.database.busy_timeout_ms.is_some() {
            base.database.busy_timeout_ms = other.database.busy_timeout_ms;
        }
        if other.graph.dir.is_some() {
            base.graph.dir = other.graph.dir.clone();
        }
    }

    /// Pattern: `PRODIGO_DB_FILE`, `PRODIGO_BUSY_TIMEOUT_MS`, `PRODIGO_GRAPH_DIR`.
    fn apply_env_overrides(config: &mut IngestConfig) {
        if let Ok(val) = std::env::var("PRODIGO_DB_FILE") {
            config.database.file_name = Some(val);
        }
        if let Ok(val) = std::env::var("PRODIGO_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.database.busy_timeout_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("PRODIGO_GRAPH_DIR") {
            config.graph.dir = Some(PathBuf::from(val));
        }
    }

    fn apply_cli_overrides(config: &mut IngestConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.graph_dir {
            config.graph.dir = Some(v.clone());
        }
        if let Some(ref v) = cli.db_file {
            config.database.file_name = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
