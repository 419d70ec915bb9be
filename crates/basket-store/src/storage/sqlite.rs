//! # SQLite Storage Slot
//!
//! Keeps the basket in a small key/value table, the way a browser keeps its
//! local storage in a per-origin SQLite file.
//!
//! ## Schema
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  local_storage                                                          │
//! │  ──────────────────────────────────────────────                         │
//! │  key         TEXT PRIMARY KEY   "basket"                                │
//! │  value       TEXT NOT NULL      '[{"product":"apple","addons":[]}]'     │
//! │  updated_at  TEXT NOT NULL      RFC 3339 timestamp of the last write    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Several `SqliteStorage` values may point at the same table with different
//! keys; each only ever touches its own row.

use std::path::Path;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use crate::storage::BasketStorage;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS local_storage (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// A storage slot backed by one row of a SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
    key: String,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and ensures the table exists.
    pub fn open(path: impl AsRef<Path>, key: impl Into<String>) -> StorageResult<Self> {
        let path = path.as_ref();
        debug!(?path, "Opening SQLite basket storage");
        Self::from_connection(Connection::open(path)?, key)
    }

    /// An isolated database that lives as long as this value (for testing).
    pub fn in_memory(key: impl Into<String>) -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?, key)
    }

    /// Wraps an existing connection.
    pub fn from_connection(conn: Connection, key: impl Into<String>) -> StorageResult<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(SqliteStorage {
            conn: Arc::new(Mutex::new(conn)),
            key: key.into(),
        })
    }

    /// Another slot in the same database.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        SqliteStorage {
            conn: Arc::clone(&self.conn),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl BasketStorage for SqliteStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute(
            "INSERT INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![self.key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn delete(&self) -> StorageResult<()> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        conn.execute("DELETE FROM local_storage WHERE key = ?1", params![self.key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_read_delete() {
        let storage = SqliteStorage::in_memory("basket").unwrap();
        assert_eq!(storage.read().unwrap(), None);

        storage.write("[]").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("[]"));

        storage.write(r#"[{"product":"apple","addons":[]}]"#).unwrap();
        assert_eq!(
            storage.read().unwrap().as_deref(),
            Some(r#"[{"product":"apple","addons":[]}]"#)
        );

        storage.delete().unwrap();
        storage.delete().unwrap();
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_keys_are_isolated() {
        let basket = SqliteStorage::in_memory("basket").unwrap();
        let other = basket.with_key("wishlist");

        basket.write("[]").unwrap();
        assert_eq!(other.read().unwrap(), None);

        other.write("[1]").unwrap();
        basket.delete().unwrap();
        assert_eq!(other.read().unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.db");

        SqliteStorage::open(&path, "basket")
            .unwrap()
            .write(r#"["apple"]"#)
            .unwrap();

        let reopened = SqliteStorage::open(&path, "basket").unwrap();
        assert_eq!(reopened.read().unwrap().as_deref(), Some(r#"["apple"]"#));
    }
}
