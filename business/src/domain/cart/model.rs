use rust_decimal::Decimal;

use super::errors::CartError;
use crate::domain::shared::value_objects::ProductId;

/// A catalog product as handed to the cart, before it has a quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: Decimal,
}

impl CartProduct {
    fn validate(&self) -> Result<(), CartError> {
        validate_fields(&self.id, self.price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub image_url: String,
    /// Unit price snapshot taken when the product was first added.
    pub price: Decimal,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line item holding a single unit of `product`.
    pub fn new(product: CartProduct) -> Result<Self, CartError> {
        product.validate()?;

        Ok(Self {
            id: product.id,
            title: product.title,
            image_url: product.image_url,
            price: product.price,
            quantity: 1,
        })
    }

    /// Constructor for data already persisted in storage.
    /// Still rejects identifiers and prices the cart could never have produced.
    pub fn from_repository(
        id: ProductId,
        title: String,
        image_url: String,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, CartError> {
        validate_fields(&id, price)?;

        Ok(Self {
            id,
            title,
            image_url,
            price,
            quantity,
        })
    }

    pub fn subtotal(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

fn validate_fields(id: &ProductId, price: Decimal) -> Result<(), CartError> {
    if id.is_empty() {
        return Err(CartError::IdEmpty);
    }
    if price < Decimal::ZERO {
        return Err(CartError::NegativePrice);
    }
    Ok(())
}

/// Ordered collection of line items with at most one entry per product id.
///
/// Items whose quantity drops to zero stay in the cart; only [`Cart::remove`]
/// drops an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from previously stored items, rejecting duplicated ids.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartError> {
        for (index, item) in items.iter().enumerate() {
            if items[..index].iter().any(|other| other.id == item.id) {
                return Err(CartError::DuplicateItem);
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Adds one unit of `product`.
    ///
    /// A product already in the cart is merged by incrementing its quantity;
    /// the stored title, image and price snapshot are kept.
    pub fn add(&mut self, product: CartProduct) -> Result<(), CartError> {
        product.validate()?;

        if self.get(&product.id).is_some() {
            self.increment(&product.id)?;
            return Ok(());
        }

        self.items.push(LineItem::new(product)?);
        Ok(())
    }

    /// Returns `false` when no item matches `id`.
    pub fn increment(&mut self, id: &ProductId) -> Result<bool, CartError> {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = item
                    .quantity
                    .checked_add(1)
                    .ok_or(CartError::QuantityOverflow)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns `false` when no item matches `id` or its quantity is already zero.
    pub fn decrement(&mut self, id: &ProductId) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| &item.id == id && item.quantity > 0)
        {
            Some(item) => {
                item.quantity -= 1;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() < len_before
    }
}
