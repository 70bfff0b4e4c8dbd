//! Records read from the analyzer's output.

pub mod entry;
pub mod graph;
pub mod rule;
pub mod summary;

pub use entry::EntryType;
pub use graph::{EdgeRecord, NodeRecord};
pub use rule::{Reference, RuleRecord};
pub use summary::PipelineSummary;
