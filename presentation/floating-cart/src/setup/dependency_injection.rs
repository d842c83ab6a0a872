use std::sync::Arc;

use tokio::task::JoinHandle;

use logger::TracingLogger;

use business::application::cart::add_to_cart::AddToCartUseCaseImpl;
use business::application::cart::decrement::DecrementItemUseCaseImpl;
use business::application::cart::increment::IncrementItemUseCaseImpl;
use business::application::cart::load::LoadCartUseCaseImpl;
use business::application::cart::remove::RemoveItemUseCaseImpl;
use business::application::cart::state::CartState;
use business::domain::cart::use_cases::add_to_cart::AddToCartUseCase;
use business::domain::cart::use_cases::decrement::DecrementItemUseCase;
use business::domain::cart::use_cases::increment::IncrementItemUseCase;
use business::domain::cart::use_cases::load::LoadCartUseCase;
use business::domain::cart::use_cases::remove::RemoveItemUseCase;
use business::domain::logger::Logger;
use business::domain::storage::KeyValueStorage;

use crate::config::app_config::AppConfig;
use crate::formatting::currency::BrlCurrencyFormatter;
use crate::navigation::router::LoggingNavigator;
use crate::view::floating_cart::FloatingCart;

/// The cart handed to every consumer: the shared state plus its operations.
pub struct CartProvider {
    pub state: Arc<CartState>,
    pub load: Arc<dyn LoadCartUseCase>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub increment: Arc<dyn IncrementItemUseCase>,
    pub decrement: Arc<dyn DecrementItemUseCase>,
    pub remove: Arc<dyn RemoveItemUseCase>,
    logger: Arc<dyn Logger>,
}

impl CartProvider {
    pub fn new(
        storage_key: String,
        storage: Arc<dyn KeyValueStorage>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let state = Arc::new(CartState::new(storage_key));

        let load = Arc::new(LoadCartUseCaseImpl {
            state: state.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let add_to_cart = Arc::new(AddToCartUseCaseImpl {
            state: state.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let increment = Arc::new(IncrementItemUseCaseImpl {
            state: state.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let decrement = Arc::new(DecrementItemUseCaseImpl {
            state: state.clone(),
            storage: storage.clone(),
            logger: logger.clone(),
        });
        let remove = Arc::new(RemoveItemUseCaseImpl {
            state: state.clone(),
            storage,
            logger: logger.clone(),
        });

        Self {
            state,
            load,
            add_to_cart,
            increment,
            decrement,
            remove,
            logger,
        }
    }

    /// Loads the saved cart in the background. Callers do not wait for it;
    /// until it finishes the cart reads as empty.
    pub fn spawn_load(&self) -> JoinHandle<()> {
        let load = self.load.clone();
        let logger = self.logger.clone();
        tokio::spawn(async move {
            if let Err(err) = load.execute().await {
                logger.error(&format!("Failed to load saved cart: {}", err));
            }
        })
    }
}

pub struct DependencyContainer {
    pub cart: CartProvider,
    pub floating_cart: Arc<FloatingCart>,
    pub logger: Arc<dyn Logger>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        Self::with_logger(config, storage, logger)
    }

    pub fn with_logger(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStorage>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let cart = CartProvider::new(config.cart.storage_key.clone(), storage, logger.clone());

        let navigator = Arc::new(LoggingNavigator::new(logger.clone()));
        let floating_cart = Arc::new(FloatingCart::new(
            cart.state.clone(),
            Arc::new(BrlCurrencyFormatter),
            navigator,
        ));

        Self {
            cart,
            floating_cart,
            logger,
        }
    }
}
