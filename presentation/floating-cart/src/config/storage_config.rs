use std::env;
use std::sync::Arc;

use business::domain::storage::KeyValueStorage;
use persistence::db::{DEFAULT_MIGRATIONS_PATH, DatabaseConfig, create_sqlite_pool, run_migrations};
use persistence::key_value::memory::InMemoryKeyValueStorage;
use persistence::key_value::repository::KeyValueStorageSqlite;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    Memory,
}

/// On-device storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_BACKEND: "sqlite" or "memory" (default: "sqlite")
    /// - DATABASE_URL: SQLite connection string (default: "sqlite://floating-cart.db")
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 1)
    /// - MIGRATIONS_PATH: Directory with SQL migrations (default: the persistence crate's migrations)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let backend = match var("CART_STORAGE_BACKEND").as_deref() {
            Some("memory") => StorageBackend::Memory,
            _ => StorageBackend::Sqlite,
        };
        let database_url =
            var("DATABASE_URL").unwrap_or_else(|| "sqlite://floating-cart.db".to_string());
        let max_connections = var("DATABASE_MAX_CONNECTIONS")
            .and_then(|value| value.parse().ok())
            .filter(|count| *count > 0)
            .unwrap_or(1);
        let migrations_path =
            var("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Self {
            backend,
            database_url,
            max_connections,
            migrations_path,
        }
    }
}

/// Initialize the key-value storage the cart persists into
///
/// # Errors
/// Returns error if the database cannot be opened or migrated
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory cart storage, nothing will be kept across runs");
            Ok(Arc::new(InMemoryKeyValueStorage::new()))
        }
        StorageBackend::Sqlite => {
            let mut db_config = DatabaseConfig::new(config.database_url.clone());
            db_config.max_connections = config.max_connections;
            let pool = create_sqlite_pool(&db_config).await?;
            run_migrations(&pool, &config.migrations_path).await?;
            Ok(Arc::new(KeyValueStorageSqlite::new(pool)))
        }
    }
}
