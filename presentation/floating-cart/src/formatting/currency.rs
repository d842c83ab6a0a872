use rust_decimal::{Decimal, RoundingStrategy};

use business::domain::cart::services::CurrencyFormatter;

/// Formats amounts as Brazilian reais, e.g. `R$ 1.234,50`.
pub struct BrlCurrencyFormatter;

impl CurrencyFormatter for BrlCurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };

        rounded = rounded.abs();
        rounded.rescale(2);
        let digits = rounded.to_string();
        let (integer, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        format!("{}R$ {},{}", sign, group_thousands(integer), cents)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
