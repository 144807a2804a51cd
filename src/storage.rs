/// Storage backends for the link list
///
/// The store only talks to `StorageBackend`; chrome.storage.sync is one
/// implementation, the in-memory map is another.
use crate::bridge::{getStorage, setStorage};
use crate::error::PersistenceError;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use wasm_bindgen_futures::{JsFuture, spawn_local};

/// Key/value persistence used by `LinkListStore`
///
/// `write` must not wait for durable completion; it only has to issue
/// writes in the order they are called.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<Value>, PersistenceError>;

    fn write(&mut self, key: &str, value: Value) -> Result<(), PersistenceError>;
}

/// In-process backend that keeps a log of every write
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, Value>,
    writes: Vec<(String, Value)>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: Value) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn writes(&self) -> &[(String, Value)] {
        &self.writes
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), PersistenceError> {
        self.values.insert(key.to_string(), value.clone());
        self.writes.push((key.to_string(), value));
        Ok(())
    }
}

/// chrome.storage.sync, prefetched once per session
///
/// Reads are served from the prefetched snapshot. Writes update the snapshot
/// and start the chrome call immediately; completion is awaited in the
/// background and failures are logged.
#[derive(Debug, Default)]
pub struct ChromeSyncStorage {
    cache: HashMap<String, Value>,
    failed_reads: HashMap<String, PersistenceError>,
}

impl ChromeSyncStorage {
    pub async fn open(keys: &[&str]) -> Self {
        let mut storage = ChromeSyncStorage::default();

        for key in keys {
            let result = match getStorage(key).await {
                Ok(js) if js.is_null() || js.is_undefined() => continue,
                Ok(js) => serde_wasm_bindgen::from_value::<Value>(js).map_err(|e| e.to_string()),
                Err(e) => Err(format!("{:?}", e)),
            };

            match result {
                Ok(value) => {
                    storage.cache.insert(key.to_string(), value);
                }
                Err(message) => {
                    let key = key.to_string();
                    storage
                        .failed_reads
                        .insert(key.clone(), PersistenceError::Read { key, message });
                }
            }
        }

        storage
    }
}

impl StorageBackend for ChromeSyncStorage {
    fn read(&self, key: &str) -> Result<Option<Value>, PersistenceError> {
        if let Some(err) = self.failed_reads.get(key) {
            return Err(err.clone());
        }
        Ok(self.cache.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), PersistenceError> {
        let js = value
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| PersistenceError::Encode {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let promise = setStorage(key, js).map_err(|e| PersistenceError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })?;

        self.cache.insert(key.to_string(), value);
        self.failed_reads.remove(key);

        let key = key.to_string();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => log::debug!("{} saved to storage", key),
                Err(e) => log::warn!("failed to save {}: {:?}", key, e),
            }
        });

        Ok(())
    }
}
