//! Integer-cent money type.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in minor currency units (cents).
///
/// All invoice arithmetic happens on the inner `i64`; floating point never
/// enters a calculation. Arithmetic is unchecked: amounts large enough to
/// overflow an `i64` are outside the supported range, and overflow panics in
/// debug builds and wraps in release builds.
///
/// Serializes as a bare integer, so `Money::from_cents(1234)` is `1234` on
/// the wire.
///
/// # Example
///
/// ```
/// use invoice_engine::models::Money;
///
/// let price = Money::from_cents(1999);
/// assert_eq!((price * 3).cents(), 5997);
/// assert_eq!(price.to_string(), "19.99");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// The zero amount.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a count of cents.
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the amount in cents.
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns the amount as a two-decimal-place major-unit value.
    ///
    /// Presentation only; calculations stay in cents.
    pub fn as_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_decimal())
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Money(cents)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(1234)).unwrap();
        assert_eq!(json, "1234");

        let money: Money = serde_json::from_str("-550").unwrap();
        assert_eq!(money.cents(), -550);
    }

    #[test]
    fn test_display_renders_major_units() {
        assert_eq!(Money::from_cents(1999).to_string(), "19.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1500);
        let b = Money::from_cents(250);

        assert_eq!(a + b, Money::from_cents(1750));
        assert_eq!(a - b, Money::from_cents(1250));
        assert_eq!(b * 4, Money::from_cents(1000));

        let mut acc = Money::ZERO;
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1750);
    }

    #[test]
    fn test_sum_of_empty_iterator_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sign_predicates() {
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::ZERO.is_zero());
    }
}
