use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::increment::{IncrementItemParams, IncrementItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

pub struct IncrementItemUseCaseImpl {
    pub state: Arc<CartState>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IncrementItemUseCase for IncrementItemUseCaseImpl {
    async fn execute(&self, params: IncrementItemParams) -> Result<Arc<Cart>, CartError> {
        self.logger
            .info(&format!("Incrementing cart item: {}", params.id));

        let guard = self
            .state
            .lock(self.storage.as_ref(), self.logger.as_ref())
            .await?;
        let mut cart = guard.draft();
        if !cart.increment(&params.id)? {
            self.logger
                .debug(&format!("Cart item {} not found, nothing to increment", params.id));
        }

        guard.save(self.storage.as_ref(), cart).await
    }
}
