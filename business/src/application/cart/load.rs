use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::state::CartState;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::load::LoadCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

pub struct LoadCartUseCaseImpl {
    pub state: Arc<CartState>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self) -> Result<Arc<Cart>, CartError> {
        self.logger.info("Loading saved cart");

        let guard = self
            .state
            .lock(self.storage.as_ref(), self.logger.as_ref())
            .await?;
        let cart = guard.current();

        self.logger
            .info(&format!("Cart ready with {} line items", cart.len()));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::snapshot::CART_STORAGE_KEY;
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use rust_decimal::Decimal;

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

    fn use_case(storage: MockStorage, logger: Arc<dyn Logger>) -> LoadCartUseCaseImpl {
        LoadCartUseCaseImpl {
            state: Arc::new(CartState::new(CART_STORAGE_KEY)),
            storage: Arc::new(storage),
            logger,
        }
    }

    #[tokio::test]
    async fn should_load_saved_products() {
        let mut mock_storage = MockStorage::new();
        mock_storage.expect_get().returning(|_| {
            Ok(Some(
                r#"[{"id":"p2","title":"Hat","image_url":"u2","price":20,"quantity":3}]"#
                    .to_string(),
            ))
        });
        mock_storage.expect_set().never();

        let use_case = use_case(mock_storage, mock_logger());

        let cart = use_case.execute().await.unwrap();

        assert_eq!(cart.len(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.id, ProductId::new("p2"));
        assert_eq!(item.title, "Hat");
        assert_eq!(item.image_url, "u2");
        assert_eq!(item.price, Decimal::from(20));
        assert_eq!(item.quantity, 3);
        assert!(Arc::ptr_eq(&cart, &use_case.state.products()));
    }

    #[tokio::test]
    async fn should_start_empty_when_nothing_saved() {
        let mut mock_storage = MockStorage::new();
        mock_storage.expect_get().returning(|_| Ok(None));

        let use_case = use_case(mock_storage, mock_logger());

        let cart = use_case.execute().await.unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_and_warn_on_malformed_snapshot() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_get()
            .returning(|_| Ok(Some("{not valid".to_string())));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = use_case(mock_storage, Arc::new(logger));

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_storage_error_when_read_fails() {
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_get()
            .returning(|_| Err(StorageError::Read));

        let use_case = use_case(mock_storage, mock_logger());

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            CartError::Storage(StorageError::Read)
        ));
        assert!(use_case.state.products().is_empty());
    }
}
