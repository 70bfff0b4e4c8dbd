//! Configuration for the ingester.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod database_config;
pub mod graph_config;
pub mod ingest_config;

pub use database_config::DatabaseConfig;
pub use graph_config::GraphConfig;
pub use ingest_config::{CliOverrides, IngestConfig};
