use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::decrement::{DecrementItemParams, DecrementItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

pub struct DecrementItemUseCaseImpl {
    pub state: Arc<CartState>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DecrementItemUseCase for DecrementItemUseCaseImpl {
    async fn execute(&self, params: DecrementItemParams) -> Result<Arc<Cart>, CartError> {
        self.logger
            .info(&format!("Decrementing cart item: {}", params.id));

        let guard = self
            .state
            .lock(self.storage.as_ref(), self.logger.as_ref())
            .await?;
        let mut cart = guard.draft();
        if !cart.decrement(&params.id) {
            self.logger.debug(&format!(
                "Cart item {} missing or already at zero, nothing to decrement",
                params.id
            ));
        }

        guard.save(self.storage.as_ref(), cart).await
    }
}
