//! Monetary balances and rates with precise decimal arithmetic
//!
//! Every amount in the engine is a `rust_decimal::Decimal`. Two wrappers carry
//! the domain rules:
//!
//! - [`Balance`] holds the current value of a holding and clamps every write
//!   to zero, so a negative balance can never be observed.
//! - [`Rate`] holds an annual or monthly rate and knows how to compound.
//!
//! Growth arithmetic saturates at `Decimal::MAX` rather than panicking when a
//! long horizon overflows the 96-bit mantissa.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of months in a year, used to convert annual rates to monthly ones
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Returns `value` or zero, whichever is larger
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Rounds to two decimal places, half away from zero (like printf's `%.2f`)
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// A non-negative monetary balance
///
/// The inner amount is private: every construction and every write goes
/// through [`non_negative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(Decimal);

impl Balance {
    /// A zero balance
    pub const ZERO: Balance = Balance(Decimal::ZERO);

    /// Creates a balance, clamping negative amounts to zero
    pub fn new(amount: Decimal) -> Self {
        Self(non_negative(amount))
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Overwrites the amount, clamping negative values to zero
    pub fn set(&mut self, amount: Decimal) {
        self.0 = non_negative(amount);
    }

    /// Returns true if the balance is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds `amount`, saturating on overflow
    pub fn credit(&mut self, amount: Decimal) {
        self.set(self.0.saturating_add(amount));
    }

    /// Subtracts `amount`; the result is clamped at zero
    pub fn debit(&mut self, amount: Decimal) {
        self.set(self.0.saturating_sub(amount));
    }

    /// Multiplies the balance by `factor`, saturating on overflow
    pub fn scale(&mut self, factor: Decimal) {
        self.set(self.0.saturating_mul(factor));
    }

    /// Rounds to two decimal places for display
    pub fn round_to_cents(&self) -> Decimal {
        round_to_cents(self.0)
    }
}

impl From<Decimal> for Balance {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Decimal {
        balance.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", round_to_cents(self.0))
    }
}

/// Represents a percentage rate (e.g., interest rate, fee rate, tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate {
    /// The rate as a decimal (e.g., 0.05 for 5%)
    value: Decimal,
}

impl Rate {
    /// A zero rate
    pub const ZERO: Rate = Rate { value: Decimal::ZERO };

    /// Creates a rate from a decimal value (e.g., 0.05 for 5%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g., 5.0 for 5%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> Decimal {
        self.value * dec!(100)
    }

    /// Converts a nominal annual rate to its monthly equivalent (annual / 12)
    pub fn monthly(&self) -> Rate {
        Rate::new(self.value / MONTHS_PER_YEAR)
    }

    /// Applies this rate to an amount
    pub fn apply(&self, amount: Decimal) -> Decimal {
        amount.saturating_mul(self.value)
    }

    /// Returns `(1 + rate)^periods`, or `Decimal::MAX` if it overflows
    pub fn compound_factor(&self, periods: u32) -> Decimal {
        (Decimal::ONE + self.value)
            .checked_powi(i64::from(periods))
            .unwrap_or(Decimal::MAX)
    }

    /// Compounds `amount` over `periods` at this rate
    pub fn compound(&self, amount: Decimal, periods: u32) -> Decimal {
        amount.saturating_mul(self.compound_factor(periods))
    }
}

impl From<Decimal> for Rate {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().round_dp(4).normalize())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn balance_is_never_negative(
            start in -1_000_000_000i64..1_000_000_000i64,
            delta in -1_000_000_000i64..1_000_000_000i64
        ) {
            let mut balance = Balance::new(Decimal::new(start, 2));
            balance.credit(Decimal::new(delta, 2));
            prop_assert!(balance.amount() >= Decimal::ZERO);
            balance.debit(Decimal::new(delta, 2));
            prop_assert!(balance.amount() >= Decimal::ZERO);
        }

        #[test]
        fn compound_factor_is_monotonic_for_positive_rates(
            bps in 1i64..500i64,
            periods in 0u32..120u32
        ) {
            let rate = Rate::new(Decimal::new(bps, 4));
            prop_assert!(rate.compound_factor(periods + 1) > rate.compound_factor(periods));
        }
    }
}
