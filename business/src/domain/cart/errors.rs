#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.id_empty")]
    IdEmpty,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.quantity_overflow")]
    QuantityOverflow,
    #[error("cart.duplicate_item")]
    DuplicateItem,
    #[error("cart.storage")]
    Storage(#[from] crate::domain::errors::StorageError),
}
