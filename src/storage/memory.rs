//! Key-value slots kept in memory.

use std::collections::HashMap;

use crate::{Error, storage::KeyValueStorage};

/// Keeps key-value slots in memory. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryKeyValueStorage {
    slots: HashMap<String, String>,
}

impl InMemoryKeyValueStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage with `value` already stored under `key`.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_owned(), value.to_owned());

        Self { slots }
    }
}

impl KeyValueStorage for InMemoryKeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
