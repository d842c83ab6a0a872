use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::add_to_cart::{AddToCartParams, AddToCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

pub struct AddToCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<Arc<Cart>, CartError> {
        let id = params.product.id.clone();
        self.logger.info(&format!("Adding product to cart: {}", id));

        let guard = self
            .state
            .lock(self.storage.as_ref(), self.logger.as_ref())
            .await?;
        let mut cart = guard.draft();
        cart.add(params.product)?;
        let cart = guard.save(self.storage.as_ref(), cart).await?;

        let quantity = cart.get(&id).map(|item| item.quantity).unwrap_or_default();
        self.logger
            .info(&format!("Product {} now has quantity {}", id, quantity));
        Ok(cart)
    }
}
