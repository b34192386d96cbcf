//! Core types used in the conversion of bank transactions.

use fpdec::Decimal;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

/// Dates are exchanged as ISO-8601 calendar dates on both sides of the conversion.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a decimal without trailing fractional zeros, e.g: `-850.00` -> `-850`.
fn natural(value: &Decimal) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Amounts are represented as exact decimals, displayed in their shortest form.
/// For ease of implementation, make use of [fpdec::Decimal] instead of implementing a custom
/// fixed-point number.
#[serde_as]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde_as(as = "DisplayFromStr")] pub Decimal);

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&natural(&self.0))
    }
}

impl std::str::FromStr for Amount {
    type Err = <Decimal as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// The rate a foreign-currency amount was converted at.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExchangeRate(pub Decimal);

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&natural(&self.0))
    }
}

impl std::str::FromStr for ExchangeRate {
    type Err = <Decimal as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn display(amount: &str) -> String {
        amount.parse::<Amount>().unwrap().to_string()
    }

    #[test]
    fn amount_drops_trailing_zeros() {
        assert_eq!(display("-850.00"), "-850");
        assert_eq!(display("-920.50"), "-920.5");
        assert_eq!(display("0.00"), "0");
        assert_eq!(display("-0.00"), "0");
        assert_eq!(display("2500.10"), "2500.1");
    }

    #[test]
    fn amount_keeps_significant_digits() {
        assert_eq!(display("100.5"), "100.5");
        assert_eq!(display("-3.78"), "-3.78");
        assert_eq!(display("7"), "7");
        assert_eq!(display("1000"), "1000");
        assert_eq!(display("0.05"), "0.05");
    }

    #[test]
    fn amount_exponent_form() {
        assert_eq!(display("1e3"), "1000");
    }

    #[test]
    fn amount_rejects_garbage() {
        assert!("twelve".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
    }

    #[test]
    fn exchange_rate_display() {
        let rate: ExchangeRate = "1.0830".parse().unwrap();
        assert_eq!(rate.to_string(), "1.083");
        let rate: ExchangeRate = "1.08".parse().unwrap();
        assert_eq!(rate.to_string(), "1.08");
    }
}
