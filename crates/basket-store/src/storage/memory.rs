//! In-memory storage slot.

use std::sync::{Arc, Mutex};

use crate::error::{StorageError, StorageResult};
use crate::storage::BasketStorage;

/// A storage slot held in memory.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        MemoryStorage {
            slot: Arc::new(Mutex::new(Some(value.into()))),
        }
    }
}

impl BasketStorage for MemoryStorage {
    fn read(&self) -> StorageResult<Option<String>> {
        let slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slot.clone())
    }

    fn write(&self, value: &str) -> StorageResult<()> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = Some(value.to_string());
        Ok(())
    }

    fn delete(&self) -> StorageResult<()> {
        let mut slot = self.slot.lock().map_err(|_| StorageError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_slot() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.write("[]").unwrap();
        assert_eq!(handle.read().unwrap().as_deref(), Some("[]"));

        handle.delete().unwrap();
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let storage = MemoryStorage::with_value("[]");
        storage.delete().unwrap();
        storage.delete().unwrap();
        assert_eq!(storage.read().unwrap(), None);
    }
}
