use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

/// Process-local storage. Nothing survives a restart.
#[derive(Default)]
pub struct InMemoryKeyValueStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_round_trip_values() {
        let storage = InMemoryKeyValueStorage::new();

        storage.set("k", "v1").await.unwrap();
        storage.set("k", "v2").await.unwrap();

        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("v2"));
        assert!(storage.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_start_with_seeded_entry() {
        let storage = InMemoryKeyValueStorage::with_entry("k", "seed");

        assert_eq!(storage.get("k").await.unwrap().as_deref(), Some("seed"));
    }
}
