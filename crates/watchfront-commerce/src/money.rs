//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The inventory service reports prices either as JSON
//! numbers or as display strings like `"$49.99"`; both normalize here.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies a storefront can price in. The inventory service only
/// reports dollars today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Prefix used when rendering and accepted when parsing.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Minor units per major unit, as a power of ten.
    pub fn decimal_places(&self) -> u32 {
        if matches!(self, Currency::JPY) {
            0
        } else {
            2
        }
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use watchfront_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        let multiplier = 10_i64.pow(currency.decimal_places());
        let scaled = (amount * multiplier as f64).round();
        if scaled > i64::MAX as f64 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }
        Ok(Self::new(scaled as i64, currency))
    }

    /// Parse a display string such as `"$1,249.99"` or `"49.5"`.
    ///
    /// The currency symbol is optional; thousands separators are ignored.
    /// Digits beyond the currency's decimal places are rejected rather than rounded.
    pub fn parse(text: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidPrice(text.to_string());

        let trimmed = text.trim();
        let unsigned = trimmed
            .strip_prefix(currency.symbol())
            .unwrap_or(trimmed)
            .trim();
        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() {
            return Err(invalid());
        }

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };
        let places = currency.decimal_places() as usize;
        let well_formed = !whole.is_empty()
            && whole.chars().all(|c| c.is_ascii_digit())
            && fraction.chars().all(|c| c.is_ascii_digit())
            && fraction.len() <= places;
        if !well_formed {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let mut fraction_cents: i64 = 0;
        for (i, c) in fraction.chars().enumerate() {
            let digit = i64::from(c.to_digit(10).ok_or_else(invalid)?);
            fraction_cents += digit * 10_i64.pow((places - i - 1) as u32);
        }

        whole
            .checked_mul(10_i64.pow(places as u32))
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(|cents| Self::new(cents, currency))
            .ok_or_else(invalid)
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), self.to_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(100.0, Currency::JPY).unwrap();
        assert_eq!(m.amount_cents, 100);
    }

    #[test]
    fn test_money_from_negative_decimal() {
        assert!(Money::from_decimal(-1.0, Currency::USD).is_err());
        assert!(Money::from_decimal(f64::NAN, Currency::USD).is_err());
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");

        let m = Money::new(100, Currency::JPY);
        assert_eq!(m.display(), "\u{00a5}100");
    }

    #[test]
    fn test_parse_display_string() {
        assert_eq!(
            Money::parse("$49.99", Currency::USD).unwrap().amount_cents,
            4999
        );
        assert_eq!(
            Money::parse("$1,249.5", Currency::USD).unwrap().amount_cents,
            124950
        );
        assert_eq!(Money::parse("12", Currency::USD).unwrap().amount_cents, 1200);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("", Currency::USD).is_err());
        assert!(Money::parse("$", Currency::USD).is_err());
        assert!(Money::parse("$12.345", Currency::USD).is_err());
        assert!(Money::parse("-3.00", Currency::USD).is_err());
        assert!(Money::parse("free", Currency::USD).is_err());
    }

    #[test]
    fn test_parse_strips_other_symbols() {
        let m = Money::parse("\u{00a3}1,000.5", Currency::GBP).unwrap();
        assert_eq!(m.amount_cents, 100_050);
        assert_eq!(m.to_string(), "\u{00a3}1000.50");
        assert!(Money::parse("\u{00a5}1.5", Currency::JPY).is_err());
    }
}
