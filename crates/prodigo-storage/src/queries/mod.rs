//! Per-table upserts and read-back queries.

pub mod entry_points;
pub mod feature_map;
pub mod key_directories;
pub mod project_metadata;
pub mod semantic_concepts;

pub use entry_points::EntryPointRow;
pub use feature_map::FeatureRow;
pub use key_directories::KeyDirectoryRow;
pub use project_metadata::ProjectMetadataRow;
pub use semantic_concepts::SemanticConceptRow;
