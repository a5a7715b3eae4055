//! Type-safe price representation using decimal arithmetic.
//!
//! Prices keep full precision through every calculation. Rounding to cents
//! only happens when a price is formatted for display. Arithmetic is checked:
//! a catalogue may carry prices large enough to overflow `Decimal` once they
//! are multiplied by a quantity.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's single currency (US dollars).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Number of decimal places shown to shoppers.
    pub const DISPLAY_DECIMALS: u32 = 2;

    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// The amount rounded to cents, with midpoints rounded away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(Self::DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of two prices, or `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Price of `quantity` units, or `None` on overflow.
    #[must_use]
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// The price divided by `divisor`, or `None` on overflow or a zero divisor.
    #[must_use]
    pub fn checked_div(self, divisor: Decimal) -> Option<Self> {
        self.0.checked_div(divisor).map(Self)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.rounded())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
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
        assert_eq!(Price::new(Decimal::from(20)).display(), "$20.00");
        assert_eq!(Price::new(Decimal::new(25, 1)).display(), "$2.50");
    }

    #[test]
    fn test_display_rounds_midpoint_away_from_zero() {
        // Banker's rounding would give 2.74 here.
        assert_eq!(Price::new(Decimal::new(2745, 3)).display(), "$2.75");
        assert_eq!(Price::new(Decimal::new(2744, 3)).display(), "$2.74");
    }

    #[test]
    fn test_rounding_does_not_change_amount() {
        let price = Price::new(Decimal::new(27_586, 4));
        assert_eq!(price.rounded(), Decimal::new(276, 2));
        assert_eq!(price.amount(), Decimal::new(27_586, 4));
    }

    #[test]
    fn test_checked_arithmetic() {
        let line = Price::from_cents(1000).checked_mul(2).unwrap();
        let total = line.checked_add(Price::from_cents(350)).unwrap();
        assert_eq!(total, Price::from_cents(2350));
        assert_eq!(
            total.checked_div(Decimal::from(10)),
            Some(Price::from_cents(235))
        );
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let huge = Price::new(Decimal::MAX);
        assert_eq!(huge.checked_mul(2), None);
        assert_eq!(huge.checked_add(Price::from_cents(1_000_000)), None);
        assert_eq!(huge.checked_div(Decimal::new(1, 1)), None);
        assert_eq!(Price::from_cents(100).checked_div(Decimal::ZERO), None);
    }

    #[test]
    fn test_is_negative() {
        assert!(Price::from_cents(-1).is_negative());
        assert!(!Price::ZERO.is_negative());
        assert!(!Price::from_cents(1).is_negative());
    }

    #[test]
    fn test_deserialize_from_json_number() {
        let price: Price = serde_json::from_str("10.5").unwrap();
        assert_eq!(price, Price::from_cents(1050));
    }
}
