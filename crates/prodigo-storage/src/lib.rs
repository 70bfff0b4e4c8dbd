//! SQLite persistence for the ingester.
//!
//! The destination schema belongs to In-Memoria: this crate only verifies
//! that the expected tables exist and upserts rows into them.

pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::IngestDatabase;
