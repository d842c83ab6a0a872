use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStorage;

use super::entity::KeyValueEntity;

/// Key-value storage backed by a single SQLite table on the device.
pub struct KeyValueStorageSqlite {
    pool: SqlitePool,
}

impl KeyValueStorageSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStorage for KeyValueStorageSqlite {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value FROM key_value_store WHERE key = ?1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read key {}: {}", key, e);
            StorageError::read()
        })?;

        Ok(entity.map(|e| e.into_value()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to write key {}: {}", key, e);
            StorageError::write()
        })?;

        Ok(())
    }
}
