//! Price representation using decimal arithmetic.
//!
//! Granja sells in a single currency (Brazilian real), so prices are a plain
//! decimal amount with BRL display formatting rather than an amount/currency
//! pair.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price in Brazilian reais.
///
/// Display formatting follows the storefront convention: `R$` prefix, two
/// fractional digits, comma as the decimal separator.
///
/// ```
/// use granja_core::Brl;
/// use rust_decimal::Decimal;
///
/// let price = Brl::new(Decimal::new(125, 1)); // 12.5
/// assert_eq!(price.to_string(), "R$ 12,50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Brl(Decimal);

impl Brl {
    /// Create a new price from a decimal amount in reais.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The amount rounded to centavos (two fractional digits, half away
    /// from zero).
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<Decimal> for Brl {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Brl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = format!("{:.2}", self.rounded()).replace('.', ",");
        write!(f, "R$ {digits}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl(value: &str) -> Brl {
        Brl::new(value.parse().expect("valid decimal"))
    }

    #[test]
    fn test_display_uses_comma_separator() {
        assert_eq!(brl("12.5").to_string(), "R$ 12,50");
    }

    #[test]
    fn test_display_pads_whole_amounts() {
        assert_eq!(brl("18").to_string(), "R$ 18,00");
    }

    #[test]
    fn test_display_rounds_to_centavos() {
        assert_eq!(brl("9.999").to_string(), "R$ 10,00");
        assert_eq!(brl("7.125").to_string(), "R$ 7,13");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(brl("0").to_string(), "R$ 0,00");
    }

    #[test]
    fn test_amount_is_preserved_unrounded() {
        let price = brl("7.125");
        assert_eq!(price.amount(), "7.125".parse().expect("valid decimal"));
    }
}
