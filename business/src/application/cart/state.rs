use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::snapshot;
use crate::domain::errors::StorageError;
use crate::domain::logger::Logger;
use crate::domain::storage::KeyValueStorage;

/// In-memory owner of the cart.
///
/// Readers get the latest published snapshot without waiting. Writers go
/// through [`CartState::lock`], which serializes them and hydrates the cart
/// from storage the first time it is taken. Every published snapshot is a new
/// `Arc`, so consumers can detect changes with `Arc::ptr_eq`.
pub struct CartState {
    storage_key: String,
    sender: watch::Sender<Arc<Cart>>,
    hydrated: Mutex<bool>,
}

impl CartState {
    pub fn new(storage_key: impl Into<String>) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(Cart::new()));
        Self {
            storage_key: storage_key.into(),
            sender,
            hydrated: Mutex::new(false),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Latest committed cart. Empty until the saved cart has been loaded.
    pub fn products(&self) -> Arc<Cart> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.sender.subscribe()
    }

    /// Takes the write lock, loading the saved cart first if nobody has yet.
    ///
    /// A failed read leaves the state unhydrated so the next caller retries.
    pub async fn lock(
        &self,
        storage: &dyn KeyValueStorage,
        logger: &dyn Logger,
    ) -> Result<CartStateGuard<'_>, CartError> {
        let mut hydrated = self.hydrated.lock().await;
        if !*hydrated {
            let cart = self.read_saved_cart(storage, logger).await?;
            logger.debug(&format!("Hydrated cart with {} line items", cart.len()));
            self.sender.send_replace(Arc::new(cart));
            *hydrated = true;
        }

        Ok(CartStateGuard {
            state: self,
            _hydrated: hydrated,
        })
    }

    async fn read_saved_cart(
        &self,
        storage: &dyn KeyValueStorage,
        logger: &dyn Logger,
    ) -> Result<Cart, CartError> {
        let Some(raw) = storage.get(&self.storage_key).await? else {
            logger.debug("No saved cart found, starting empty");
            return Ok(Cart::new());
        };

        match snapshot::decode(&raw) {
            Ok(cart) => Ok(cart),
            Err(err) => {
                logger.warn(&format!("Discarding unreadable saved cart: {}", err));
                Ok(Cart::new())
            }
        }
    }
}

/// Exclusive access to the cart for one mutation.
pub struct CartStateGuard<'a> {
    state: &'a CartState,
    _hydrated: MutexGuard<'a, bool>,
}

impl CartStateGuard<'_> {
    pub fn current(&self) -> Arc<Cart> {
        self.state.products()
    }

    /// Owned copy of the current cart to mutate before saving.
    pub fn draft(&self) -> Cart {
        self.state.sender.borrow().as_ref().clone()
    }

    /// Writes `cart` to storage and publishes it once the write succeeded.
    /// When the write fails the in-memory cart is left as it was.
    pub async fn save(
        self,
        storage: &dyn KeyValueStorage,
        cart: Cart,
    ) -> Result<Arc<Cart>, CartError> {
        let raw = snapshot::encode(&cart).map_err(|_| StorageError::write())?;
        storage.set(&self.state.storage_key, &raw).await?;

        let cart = Arc::new(cart);
        self.state.sender.send_replace(cart.clone());
        Ok(cart)
    }
}
