//! Custom Test Assertions
//!
//! Assertion helpers for projected figures and holding balances.

use domain_investment::Investment;
use rust_decimal::Decimal;

/// Asserts that `actual` lands within `tolerance` of `expected`
///
/// Projections carry more digits than a report shows, so tests compare them
/// against the printed figure with a cent or so of slack.
pub fn assert_decimal_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let gap = (actual - expected).abs();
    if gap > tolerance {
        panic!("Decimals differ: {actual} is {gap} away from {expected} (allowed {tolerance})");
    }
}

/// Asserts that an investment's balance is not negative
pub fn assert_balance_non_negative(investment: &Investment) {
    assert!(
        investment.balance() >= Decimal::ZERO,
        "Balance of {} went negative: {}",
        investment.name(),
        investment.balance()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestInvestmentBuilder;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_decimal_approx_eq() {
        assert_decimal_approx_eq(dec!(100.001), dec!(100.002), dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Decimals differ")]
    fn test_assert_decimal_approx_eq_fails() {
        assert_decimal_approx_eq(dec!(100), dec!(101), dec!(0.5));
    }

    #[test]
    fn test_assert_balance_non_negative_after_drain() {
        let mut stock = TestInvestmentBuilder::stock().with_balance(dec!(5)).build();
        stock.advance_one_month();
        assert_balance_non_negative(&stock);
    }
}
