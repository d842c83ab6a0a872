use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Persistent string key-value store on the device.
///
/// `set` overwrites whatever value the key held before.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
