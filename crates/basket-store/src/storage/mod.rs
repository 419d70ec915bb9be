//! # Storage Slot
//!
//! The basket is persisted as one text value under one key. This module is
//! the capability the store is handed to reach it.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      BasketStorage (trait)                              │
//! │                 read() / write(value) / delete()                        │
//! │                          │                                              │
//! │           ┌──────────────┴───────────────┐                              │
//! │           ▼                              ▼                              │
//! │   MemoryStorage                   SqliteStorage                         │
//! │   Arc<Mutex<Option<String>>>      local_storage(key, value, updated_at) │
//! │   tests, ephemeral sessions       survives restarts                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes replace the whole value. With more than one writer the last write
//! wins; nothing here merges baskets.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::error::StorageResult;

/// Read/write/delete over a single storage key.
pub trait BasketStorage {
    /// Returns the stored value, or `None` when the key is absent.
    fn read(&self) -> StorageResult<Option<String>>;

    /// Replaces the stored value.
    fn write(&self, value: &str) -> StorageResult<()>;

    /// Removes the key. Removing an absent key is not an error.
    fn delete(&self) -> StorageResult<()>;
}

impl<S: BasketStorage + ?Sized> BasketStorage for &S {
    fn read(&self) -> StorageResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        (**self).write(value)
    }

    fn delete(&self) -> StorageResult<()> {
        (**self).delete()
    }
}

impl<S: BasketStorage + ?Sized> BasketStorage for Box<S> {
    fn read(&self) -> StorageResult<Option<String>> {
        (**self).read()
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        (**self).write(value)
    }

    fn delete(&self) -> StorageResult<()> {
        (**self).delete()
    }
}
