//! Connection management: one connection, one transaction per stage.

pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};

use prodigo_core::errors::StorageError;
use rusqlite::{Connection, OpenFlags};

use self::pragmas::apply_pragmas;
use crate::schema::verify_tables;

/// The single connection to the In-Memoria database.
///
/// Dropping the value closes the connection, so every exit path releases it.
pub struct IngestDatabase {
    conn: Connection,
    path: Option<PathBuf>,
}

impl IngestDatabase {
    /// Open an existing database, apply pragmas, and verify the destination
    /// tables are present. A missing file is an error, never created.
    pub fn open(path: &Path, busy_timeout_ms: u64) -> Result<Self, StorageError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|e| {
            StorageError::SqliteError {
                message: format!("open {}: {e}", path.display()),
            }
        })?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        verify_tables(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Wrap an already-prepared connection (for testing against an
    /// in-memory database).
    pub fn from_connection(conn: Connection, busy_timeout_ms: u64) -> Result<Self, StorageError> {
        apply_pragmas(&conn, busy_timeout_ms)?;
        verify_tables(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Run `f` inside a `BEGIN IMMEDIATE` transaction, committing on success.
    pub fn with_transaction<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&rusqlite::Transaction<'_>) -> Result<T, StorageError>,
    {
        writer::with_immediate_transaction(&self.conn, f)
    }

    /// Borrow the connection for read-back queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, surfacing any error SQLite reports.
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, e)| StorageError::SqliteError {
            message: format!("close: {e}"),
        })
    }
}
