//! Money type for income and expense amounts
//!
//! Amounts are held as integer cents so that category totals add up exactly.
//! On the wire they are plain JSON decimal numbers (`3.5`, `12.0`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
///
/// Arithmetic saturates at the `i64` range, so totals over any number of
/// entries cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted from user input or storage, 9,999,999,999,999.99
    ///
    /// Fifteen significant digits, so every accepted amount survives the trip
    /// through a JSON `f64` exactly.
    pub const MAX_CENTS: i64 = 999_999_999_999_999;

    /// Create a Money amount from a count of cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents, e.g. `(3, 50)` is 3.50
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// The zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// The cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if this is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if this is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The amount as a floating-point number of units
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a non-negative amount typed by the user
    ///
    /// Accepts `"3.5"`, `"3.50"`, `"3"`, `".5"`, `"$3.50"` and surrounding
    /// whitespace. At most two fractional digits are allowed and the amount
    /// may not exceed [`Money::MAX_CENTS`]. Signs, exponents and anything
    /// else are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed);

        if body.starts_with('-') {
            return Err(MoneyParseError::Negative(trimmed.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(trimmed.to_string());

        let (whole, fraction) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let too_large = || MoneyParseError::TooLarge(trimmed.to_string());

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| too_large())?
        };

        let digits = fraction.as_bytes();
        let digit = |i: usize| digits.get(i).map_or(0, |b| i64::from(b - b'0'));
        let cents = digit(0) * 10 + digit(1);

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .filter(|&c| c <= Self::MAX_CENTS)
            .map(Self)
            .ok_or_else(too_large)
    }

    /// Format with a currency symbol, e.g. `$3.50` or `-€1.25`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        let cents = (value * 100.0).round();
        if !cents.is_finite() || cents.abs() > Self::MAX_CENTS as f64 {
            return Err(serde::de::Error::custom(format!(
                "amount out of range: {}",
                value
            )));
        }
        Ok(Self(cents as i64))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount cannot be negative: {0}")]
    Negative(String),

    #[error("Amount is too large: {0}")]
    TooLarge(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_units_cents(10, 50), m);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("€"), "€0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(1500);

        assert_eq!((a + b).cents(), 2500);
        assert_eq!((a - b).cents(), -500);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(10)).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - big).cents(), i64::MIN);
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("3.5").unwrap().cents(), 350);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("7.").unwrap().cents(), 700);
        assert_eq!(Money::parse(" 0 ").unwrap().cents(), 0);
    }

    #[test]
    fn test_parse_rejects_sub_cent_digits() {
        for input in ["1.005", "0.004", "0.999", "3.500"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for input in ["", " ", ".", "abc", "1e3", "10.5x", "1.2.3", "1,50", "١٢"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::InvalidFormat(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            Money::parse("-3"),
            Err(MoneyParseError::Negative(_))
        ));
    }

    #[test]
    fn test_parse_caps_amount() {
        assert_eq!(
            Money::parse("9999999999999.99").unwrap().cents(),
            Money::MAX_CENTS
        );
        for input in [
            "10000000000000",
            "50000000000000000",
            "10000000000000000.01",
            "99999999999999999999",
        ] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::TooLarge(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_sum_of_max_amounts_does_not_overflow() {
        let max = Money::from_cents(Money::MAX_CENTS);

        let few: Money = std::iter::repeat(max).take(4).sum();
        assert_eq!(few.cents(), Money::MAX_CENTS * 4);

        let many: Money = std::iter::repeat(max).take(20_000).sum();
        assert_eq!(many.cents(), i64::MAX);
    }

    #[test]
    fn test_serializes_as_decimal_number() {
        let json = serde_json::to_string(&Money::from_cents(350)).unwrap();
        assert_eq!(json, "3.5");

        let m: Money = serde_json::from_str("3.5").unwrap();
        assert_eq!(m.cents(), 350);

        let whole: Money = serde_json::from_str("12").unwrap();
        assert_eq!(whole.cents(), 1200);

        let tenth: Money = serde_json::from_str("0.1").unwrap();
        assert_eq!(tenth.cents(), 10);
    }

    #[test]
    fn test_json_round_trip_up_to_cap() {
        for cents in [
            Money::MAX_CENTS,
            Money::MAX_CENTS - 1,
            Money::MAX_CENTS - 98,
            900_719_925_474_099,
            100_000_000_000_001,
            123_456_789_012_345,
            1,
        ] {
            let json = serde_json::to_string(&Money::from_cents(cents)).unwrap();
            let back: Money = serde_json::from_str(&json).unwrap();
            assert_eq!(back.cents(), cents, "{json}");
        }
    }

    #[test]
    fn test_deserialize_rejects_amount_over_cap() {
        assert!(serde_json::from_str::<Money>("10000000000000.01").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
    }
}
