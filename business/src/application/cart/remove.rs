use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::remove::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

pub struct RemoveItemUseCaseImpl {
    pub state: Arc<CartState>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<Arc<Cart>, CartError> {
        self.logger
            .info(&format!("Removing cart item: {}", params.id));

        let guard = self
            .state
            .lock(self.storage.as_ref(), self.logger.as_ref())
            .await?;
        let mut cart = guard.draft();
        let removed = cart.remove(&params.id);
        let cart = guard.save(self.storage.as_ref(), cart).await?;

        if removed {
            self.logger
                .info(&format!("Cart item removed: {}", params.id));
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::snapshot::{self, CART_STORAGE_KEY};
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub Storage {}

        #[async_trait]
        impl KeyValueStorage for Storage {
            async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
            async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    const SAVED_CART: &str = r#"[
        {"id":"p1","title":"Shirt","image_url":"u","price":50,"quantity":0},
        {"id":"p2","title":"Hat","image_url":"u2","price":20,"quantity":3}
    ]"#;

    #[tokio::test]
    async fn should_remove_item_and_persist_remaining() {
        let written = Arc::new(std::sync::Mutex::new(None::<String>));
        let written_clone = written.clone();
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_get()
            .returning(|_| Ok(Some(SAVED_CART.to_string())));
        mock_storage.expect_set().times(1).returning(move |_, value| {
            *written_clone.lock().unwrap() = Some(value.to_string());
            Ok(())
        });

        let use_case = RemoveItemUseCaseImpl {
            state: Arc::new(CartState::new(CART_STORAGE_KEY)),
            storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveItemParams {
                id: ProductId::new("p1"),
            })
            .await
            .unwrap();

        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ProductId::new("p1")).is_none());

        let stored = written.lock().unwrap().clone().unwrap();
        assert_eq!(&snapshot::decode(&stored).unwrap(), cart.as_ref());
    }

    #[tokio::test]
    async fn should_ignore_unknown_id() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_get()
            .returning(|_| Ok(Some(SAVED_CART.to_string())));
        mock_storage.expect_set().times(1).returning(|_, _| Ok(()));

        let use_case = RemoveItemUseCaseImpl {
            state: Arc::new(CartState::new(CART_STORAGE_KEY)),
            storage: Arc::new(mock_storage),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(RemoveItemParams {
                id: ProductId::new("nonexistent"),
            })
            .await
            .unwrap();

        assert_eq!(cart.len(), 2);
    }
}
