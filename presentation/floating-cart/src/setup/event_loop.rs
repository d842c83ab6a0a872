use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartProduct;
use business::domain::cart::use_cases::add_to_cart::AddToCartParams;
use business::domain::cart::use_cases::decrement::DecrementItemParams;
use business::domain::cart::use_cases::increment::IncrementItemParams;
use business::domain::cart::use_cases::remove::RemoveItemParams;
use business::domain::shared::value_objects::ProductId;

use crate::setup::dependency_injection::DependencyContainer;

/// One line of user input, already parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Add(CartProduct),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Tap,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("input.empty")]
    Empty,
    #[error("input.unknown_command")]
    UnknownCommand(String),
    #[error("input.missing_argument")]
    MissingArgument(&'static str),
    #[error("input.invalid_price")]
    InvalidPrice(String),
    #[error("input.invalid_encoding")]
    InvalidEncoding,
}

impl UiEvent {
    /// Parses one raw input line. Trailing `\n` or `\r\n` is ignored.
    pub fn from_line(raw: &[u8]) -> Result<Self, ParseError> {
        let line = std::str::from_utf8(raw).map_err(|_| ParseError::InvalidEncoding)?;
        line.trim_end_matches(['\n', '\r']).parse()
    }
}

impl FromStr for UiEvent {
    type Err = ParseError;

    /// Accepts `add <id> <price> <image_url> <title...>`, `inc <id>`,
    /// `dec <id>`, `rm <id>`, `tap` and `quit`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseError::Empty)?;

        match command {
            "add" => {
                let id = words.next().ok_or(ParseError::MissingArgument("id"))?;
                let raw_price = words.next().ok_or(ParseError::MissingArgument("price"))?;
                let price = Decimal::from_str(raw_price)
                    .map_err(|_| ParseError::InvalidPrice(raw_price.to_string()))?;
                let image_url = words
                    .next()
                    .ok_or(ParseError::MissingArgument("image_url"))?;
                let title = words.collect::<Vec<_>>().join(" ");
                if title.is_empty() {
                    return Err(ParseError::MissingArgument("title"));
                }

                Ok(UiEvent::Add(CartProduct {
                    id: ProductId::new(id),
                    title,
                    image_url: image_url.to_string(),
                    price,
                }))
            }
            "inc" => single_id(words.next()).map(UiEvent::Increment),
            "dec" => single_id(words.next()).map(UiEvent::Decrement),
            "rm" => single_id(words.next()).map(UiEvent::Remove),
            "tap" => Ok(UiEvent::Tap),
            "quit" | "exit" => Ok(UiEvent::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn single_id(word: Option<&str>) -> Result<ProductId, ParseError> {
    word.map(ProductId::new)
        .ok_or(ParseError::MissingArgument("id"))
}

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs the operation behind `event`. Cart errors are returned to the caller;
/// the published cart is untouched when one occurs.
pub async fn dispatch(event: UiEvent, container: &DependencyContainer) -> Result<Flow, CartError> {
    let cart = &container.cart;
    match event {
        UiEvent::Add(product) => {
            cart.add_to_cart.execute(AddToCartParams { product }).await?;
        }
        UiEvent::Increment(id) => {
            cart.increment.execute(IncrementItemParams { id }).await?;
        }
        UiEvent::Decrement(id) => {
            cart.decrement.execute(DecrementItemParams { id }).await?;
        }
        UiEvent::Remove(id) => {
            cart.remove.execute(RemoveItemParams { id }).await?;
        }
        UiEvent::Tap => container.floating_cart.press(),
        UiEvent::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::app_config::AppConfig;
    use crate::config::cart_config::CartConfig;
    use crate::config::storage_config::StorageConfig;
    use persistence::key_value::memory::InMemoryKeyValueStorage;

    #[test]
    fn should_parse_add_with_multi_word_title() {
        let event: UiEvent = "add p1 49.90 https://img/shirt.png Blue Shirt"
            .parse()
            .unwrap();

        assert_eq!(
            event,
            UiEvent::Add(CartProduct {
                id: ProductId::new("p1"),
                title: "Blue Shirt".to_string(),
                image_url: "https://img/shirt.png".to_string(),
                price: Decimal::from_str("49.90").unwrap(),
            })
        );
    }

    #[test]
    fn should_parse_id_commands() {
        assert_eq!(
            "inc p1".parse::<UiEvent>(),
            Ok(UiEvent::Increment(ProductId::new("p1")))
        );
        assert_eq!(
            "dec p1".parse::<UiEvent>(),
            Ok(UiEvent::Decrement(ProductId::new("p1")))
        );
        assert_eq!(
            "  rm   p1 ".parse::<UiEvent>(),
            Ok(UiEvent::Remove(ProductId::new("p1")))
        );
        assert_eq!("tap".parse::<UiEvent>(), Ok(UiEvent::Tap));
        assert_eq!("quit".parse::<UiEvent>(), Ok(UiEvent::Quit));
    }

    #[test]
    fn should_reject_bad_input() {
        assert_eq!("".parse::<UiEvent>(), Err(ParseError::Empty));
        assert_eq!(
            "buy p1".parse::<UiEvent>(),
            Err(ParseError::UnknownCommand("buy".to_string()))
        );
        assert_eq!(
            "inc".parse::<UiEvent>(),
            Err(ParseError::MissingArgument("id"))
        );
        assert_eq!(
            "add p1 cheap u Shirt".parse::<UiEvent>(),
            Err(ParseError::InvalidPrice("cheap".to_string()))
        );
        assert_eq!(
            "add p1 10 u".parse::<UiEvent>(),
            Err(ParseError::MissingArgument("title"))
        );
    }

    #[test]
    fn should_parse_raw_lines() {
        assert_eq!(
            UiEvent::from_line(b"rm p1\r\n"),
            Ok(UiEvent::Remove(ProductId::new("p1")))
        );
        assert_eq!(
            UiEvent::from_line(b"\xff\xfe\n"),
            Err(ParseError::InvalidEncoding)
        );
    }

    #[tokio::test]
    async fn should_dispatch_operations_against_shared_cart() {
        let config = AppConfig {
            storage: StorageConfig::from_vars(|_| None),
            cart: CartConfig::from_vars(|_| None),
        };
        let container =
            DependencyContainer::new(&config, Arc::new(InMemoryKeyValueStorage::new()));

        for line in ["add p1 50 u Shirt", "add p1 50 u Shirt", "inc p1", "dec p1"] {
            let flow = dispatch(line.parse().unwrap(), &container).await.unwrap();
            assert_eq!(flow, Flow::Continue);
        }

        let view = container.floating_cart.render();
        assert_eq!(view.items_label, "2 itens");
        assert_eq!(view.total_label, "R$ 100,00");

        let flow = dispatch(UiEvent::Quit, &container).await.unwrap();
        assert_eq!(flow, Flow::Quit);
    }

    #[tokio::test]
    async fn should_surface_validation_errors() {
        let config = AppConfig {
            storage: StorageConfig::from_vars(|_| None),
            cart: CartConfig::from_vars(|_| None),
        };
        let container =
            DependencyContainer::new(&config, Arc::new(InMemoryKeyValueStorage::new()));

        let result = dispatch("add p1 -5 u Shirt".parse().unwrap(), &container).await;

        assert!(matches!(result, Err(CartError::NegativePrice)));
        assert!(container.cart.state.products().is_empty());
    }
}
