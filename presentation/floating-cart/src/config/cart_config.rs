use std::env;

use business::domain::cart::snapshot::CART_STORAGE_KEY;

/// Cart behaviour configuration
#[derive(Debug, Clone)]
pub struct CartConfig {
    pub storage_key: String,
}

impl CartConfig {
    /// Load cart configuration from environment variables
    ///
    /// Environment variables:
    /// - CART_STORAGE_KEY: Key holding the saved product list (default: "@GoMarketplace:products")
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let storage_key = var("CART_STORAGE_KEY")
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| CART_STORAGE_KEY.to_string());

        Self { storage_key }
    }
}
