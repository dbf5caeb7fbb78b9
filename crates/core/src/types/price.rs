//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are kept at full precision everywhere; rounding to cents happens only
//! when a price is prepared for display.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Quantity;

/// Number of decimal places shown to visitors.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// A price in US dollars.
///
/// Serializes transparently as the underlying decimal, so a cart snapshot stores
/// `"price": "0.80"`. Deserialization also accepts plain JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, DISPLAY_DECIMAL_PLACES))
    }

    /// The full-precision amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: Quantity) -> Self {
        Self(self.0 * Decimal::from(quantity.get()))
    }

    /// Round to cents, half away from zero.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(DISPLAY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        let cents = self.rounded().0;
        if cents.is_sign_negative() && !cents.is_zero() {
            format!("-${:.2}", cents.abs())
        } else {
            format!("${:.2}", cents.abs())
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::new(Decimal::new(5, 1)).display(), "$0.50");
        assert_eq!(Price::from_cents(1999).display(), "$19.99");
        assert_eq!(Price::ZERO.display(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Price::new(Decimal::new(1005, 3)).display(), "$1.01");
        assert_eq!(Price::new(Decimal::new(1004, 3)).display(), "$1.00");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Price::new(Decimal::new(-2, 1)).display(), "-$0.20");
        assert!(Price::new(Decimal::new(-2, 1)).is_negative());
        assert!(!Price::ZERO.is_negative());
    }

    #[test]
    fn test_times_keeps_full_precision() {
        let unit = Price::new(Decimal::new(333, 3));
        let total = unit.times(Quantity::new(3).unwrap());
        assert_eq!(total.amount(), Decimal::new(999, 3));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(50), Price::from_cents(75)].into_iter().sum();
        assert_eq!(total, Price::from_cents(125));
    }

    #[test]
    fn test_deserializes_from_string_and_number() {
        let from_str: Price = serde_json::from_str("\"0.80\"").unwrap();
        let from_num: Price = serde_json::from_str("0.5").unwrap();
        assert_eq!(from_str, Price::from_cents(80));
        assert_eq!(from_num, Price::from_cents(50));
    }
}
