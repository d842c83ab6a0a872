pub mod floating_cart;
