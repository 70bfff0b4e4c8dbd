//! Core types, classification tables, errors, config, and tracing for the
//! Prodigo ingester.
//!
//! Everything here is pure: no database access and no process-level side
//! effects beyond the one-time tracing subscriber installation.

pub mod config;
pub mod constants;
pub mod errors;
pub mod io;
pub mod tracing;
pub mod types;
