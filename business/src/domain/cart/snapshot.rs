//! JSON snapshot of the cart as kept in device storage.
//!
//! The stored shape is an array of `{id, title, image_url, price, quantity}`
//! objects with `price` as a plain JSON number.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::CartError;
use super::model::{Cart, LineItem};
use crate::domain::shared::value_objects::ProductId;

/// Storage key under which the serialized product list lives.
pub const CART_STORAGE_KEY: &str = "@GoMarketplace:products";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot.malformed")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot.invalid")]
    Invalid(#[from] CartError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LineItemRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItemRecord {
    pub fn into_domain(self) -> Result<LineItem, CartError> {
        LineItem::from_repository(
            ProductId::new(self.id),
            self.title,
            self.image_url,
            self.price,
            self.quantity,
        )
    }
}

impl From<&LineItem> for LineItemRecord {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.as_str().to_string(),
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            price: item.price,
            quantity: item.quantity,
        }
    }
}

pub fn encode(cart: &Cart) -> Result<String, SnapshotError> {
    let records: Vec<LineItemRecord> = cart.items().iter().map(LineItemRecord::from).collect();
    Ok(serde_json::to_string(&records)?)
}

pub fn decode(raw: &str) -> Result<Cart, SnapshotError> {
    let records: Vec<LineItemRecord> = serde_json::from_str(raw)?;
    let items = records
        .into_iter()
        .map(LineItemRecord::into_domain)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Cart::from_items(items)?)
}
