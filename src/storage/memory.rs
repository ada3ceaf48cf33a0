//! In-memory key-value storage, mostly useful for tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::{Error, storage::KeyValueStorage};

/// Keeps key-value pairs in a hash map.
///
/// Clones share the same map, so a test can keep a handle to the storage it
/// hands to a store and inspect what the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        let items = self.items.lock().map_err(|_| Error::StoreLockError)?;

        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut items = self.items.lock().map_err(|_| Error::StoreLockError)?;
        items.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        let mut items = self.items.lock().map_err(|_| Error::StoreLockError)?;
        items.remove(key);

        Ok(())
    }
}
