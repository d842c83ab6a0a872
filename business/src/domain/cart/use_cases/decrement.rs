use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct DecrementItemParams {
    pub id: ProductId,
}

/// Quantity never goes below zero; an item at zero stays in the cart.
#[async_trait]
pub trait DecrementItemUseCase: Send + Sync {
    async fn execute(&self, params: DecrementItemParams) -> Result<Arc<Cart>, CartError>;
}
