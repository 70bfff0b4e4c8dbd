//! Loads Prodigo rule extractions and dependency graphs into an In-Memoria
//! database.
//!
//! The run is a fixed sequence of stages (see [`pipeline::run`]); each stage
//! builds its rows in memory and writes them in one transaction.

pub mod paths;
pub mod pipeline;
pub mod stages;

pub use paths::IngestPaths;
pub use pipeline::{run, IngestSummary};
