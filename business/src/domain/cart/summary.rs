use rust_decimal::Decimal;

use super::model::{Cart, LineItem};

/// Aggregates shown by the floating cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of `price * quantity` over every line item.
    pub total_price: Decimal,
    /// Sum of quantities over every line item.
    pub total_items: u64,
}

impl CartSummary {
    pub fn from_items(items: &[LineItem]) -> Self {
        items.iter().fold(
            Self {
                total_price: Decimal::ZERO,
                total_items: 0,
            },
            |acc, item| Self {
                total_price: acc.total_price.saturating_add(item.subtotal()),
                total_items: acc.total_items + u64::from(item.quantity),
            },
        )
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self::from_items(cart.items())
    }
}
