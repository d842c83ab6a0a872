use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

#[async_trait]
pub trait LoadCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<Arc<Cart>, CartError>;
}
