use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::ProductId;

pub struct IncrementItemParams {
    pub id: ProductId,
}

#[async_trait]
pub trait IncrementItemUseCase: Send + Sync {
    async fn execute(&self, params: IncrementItemParams) -> Result<Arc<Cart>, CartError>;
}
