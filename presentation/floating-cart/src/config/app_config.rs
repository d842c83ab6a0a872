use super::{cart_config::CartConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub storage: StorageConfig,
    pub cart: CartConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            cart: CartConfig::from_env(),
        }
    }
}
