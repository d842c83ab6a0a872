use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use business::application::cart::state::CartState;
use business::domain::cart::model::Cart;
use business::domain::cart::services::{CART_SCREEN, CurrencyFormatter, Navigator};
use business::domain::cart::summary::CartSummary;

pub const CART_BUTTON_TEST_ID: &str = "navigate-to-cart-button";

/// What the floating cart shows on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatingCartView {
    pub button_test_id: &'static str,
    pub items_label: String,
    pub total_label: String,
}

impl fmt::Display for FloatingCartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[cart] {} | {}", self.items_label, self.total_label)
    }
}

struct Memo {
    products: Arc<Cart>,
    view: FloatingCartView,
}

/// Always-visible cart summary with a button leading to the cart screen.
///
/// Read-only over [`CartState`]. Totals are recomputed only when the state
/// publishes a new snapshot.
pub struct FloatingCart {
    state: Arc<CartState>,
    formatter: Arc<dyn CurrencyFormatter>,
    navigator: Arc<dyn Navigator>,
    memo: Mutex<Option<Memo>>,
}

impl FloatingCart {
    pub fn new(
        state: Arc<CartState>,
        formatter: Arc<dyn CurrencyFormatter>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state,
            formatter,
            navigator,
            memo: Mutex::new(None),
        }
    }

    pub fn render(&self) -> FloatingCartView {
        let products = self.state.products();
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(cached) = memo.as_ref()
            && Arc::ptr_eq(&cached.products, &products)
        {
            return cached.view.clone();
        }

        let summary = CartSummary::from(products.as_ref());
        let view = FloatingCartView {
            button_test_id: CART_BUTTON_TEST_ID,
            items_label: format!("{} itens", summary.total_items),
            total_label: self.formatter.format(summary.total_price),
        };
        *memo = Some(Memo {
            products,
            view: view.clone(),
        });
        view
    }

    pub fn press(&self) {
        self.navigator.navigate(CART_SCREEN);
    }
}
