use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::anyhow;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Key, KeyValueStore};

/// In-memory key value store.
///
/// Clones share the same entries. An optional capacity limits the total length of all stored
/// values, mimicking the quota of browser storage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<Key, String>>>,
    capacity: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Arc::default(),
            capacity: Some(capacity),
        }
    }

    /// Stores a raw value, bypassing serialization.
    pub fn insert_raw(&self, key: Key, value: &str) -> Result<(), Error> {
        self.lock()?.insert(key, value.to_string());
        Ok(())
    }

    pub fn get_raw(&self, key: Key) -> Result<Option<String>, Error> {
        Ok(self.lock()?.get(&key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Key, String>>, Error> {
        self.entries
            .lock()
            .map_err(|_| Error::Other(anyhow!("memory storage poisoned")))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match self.lock()?.get(&key) {
            Some(value) => Ok(Some(serde_json::from_str(value)?)),
            None => Ok(None),
        }
    }

    fn set<T: Serialize>(&self, key: Key, value: &T) -> Result<(), Error> {
        let value = serde_json::to_string(value)?;
        let mut entries = self.lock()?;
        if let Some(capacity) = self.capacity {
            let used = entries
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(_, v)| v.len())
                .sum::<usize>();
            if used + value.len() > capacity {
                return Err(Error::QuotaExceeded);
            }
        }
        entries.insert(key, value);
        Ok(())
    }
}
