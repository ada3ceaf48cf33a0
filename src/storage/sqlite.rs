//! Key-value storage backed by a single SQLite table.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, storage::KeyValueStorage};

/// Create the table that holds the key-value pairs.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Stores key-value pairs in the `storage` table of a SQLite database.
///
/// Clones share the same connection.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    db_connection: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Wrap a connection to a database that already has the storage table,
    /// see [create_storage_table].
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        connection
            .query_row("SELECT value FROM storage WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Error::from)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        connection.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::StoreLockError)?;

        connection.execute("DELETE FROM storage WHERE key = ?1", [key])?;

        Ok(())
    }
}
