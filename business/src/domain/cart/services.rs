use rust_decimal::Decimal;

/// Screen that shows the full cart.
pub const CART_SCREEN: &str = "Cart";

/// Service port for rendering money amounts in the user's locale.
pub trait CurrencyFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

/// Service port for the app router.
///
/// Requests are fire-and-forget; callers never observe the outcome.
pub trait Navigator: Send + Sync {
    fn navigate(&self, screen: &str);
}
