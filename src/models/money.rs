//! Integer-cent money type used for every price in the catalog.
//!
//! Prices are held in cents so that `$0.50 + $0.70` is exactly `$1.20` and
//! totals always print with two decimals.

use serde::Serialize;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A non-negative amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Money(u64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.0 / 100
    }

    #[inline]
    pub const fn cents_part(&self) -> u64 {
        self.0 % 100
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_always_has_two_decimals() {
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(650).to_string(), "$6.50");
        assert_eq!(Money::from_cents(70).to_string(), "$0.70");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_dollars_and_cents_parts() {
        let price = Money::from_cents(650);
        assert_eq!(price.dollars(), 6);
        assert_eq!(price.cents_part(), 50);
    }

    #[test]
    fn test_sum_is_exact() {
        let parts = [Money::from_cents(50), Money::from_cents(70), Money::from_cents(100)];
        let total: Money = parts.into_iter().sum();
        assert_eq!(total, Money::from_cents(220));
        assert_eq!(total.to_string(), "$2.20");
    }

    #[test]
    fn test_add() {
        assert_eq!(Money::from_cents(500) + Money::from_cents(100), Money::from_cents(600));
    }
}
