//! Tests for balances and rates
//!
//! Tests cover balance clamping, rate conversion, compounding, and
//! serialization of the kernel's monetary types.

use core_kernel::{non_negative, round_to_cents, Balance, Rate, MONTHS_PER_YEAR};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod balance_tests {
    use super::*;

    #[test]
    fn test_new_keeps_positive_amount() {
        let balance = Balance::new(dec!(5000.00));
        assert_eq!(balance.amount(), dec!(5000.00));
    }

    #[test]
    fn test_new_clamps_negative_amount() {
        let balance = Balance::new(dec!(-10));
        assert!(balance.is_zero());
    }

    #[test]
    fn test_set_clamps_negative_amount() {
        let mut balance = Balance::new(dec!(10));
        balance.set(dec!(-0.01));
        assert_eq!(balance.amount(), Decimal::ZERO);
    }

    #[test]
    fn test_credit_and_debit() {
        let mut balance = Balance::new(dec!(100));
        balance.credit(dec!(50));
        assert_eq!(balance.amount(), dec!(150));
        balance.debit(dec!(30));
        assert_eq!(balance.amount(), dec!(120));
    }

    #[test]
    fn test_scale() {
        let mut balance = Balance::new(dec!(3000));
        balance.scale(dec!(1.008));
        assert_eq!(balance.amount(), dec!(3024.000));
    }

    #[test]
    fn test_scale_saturates_on_overflow() {
        let mut balance = Balance::new(Decimal::MAX);
        balance.scale(dec!(2));
        assert_eq!(balance.amount(), Decimal::MAX);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Balance::default(), Balance::ZERO);
    }

    #[test]
    fn test_display_uses_two_decimal_places() {
        let balance = Balance::new(dec!(8066.666666));
        assert_eq!(balance.to_string(), "8066.67");
    }

    #[test]
    fn test_round_to_cents() {
        let balance = Balance::new(dec!(5445.030536));
        assert_eq!(balance.round_to_cents(), dec!(5445.03));
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        assert_eq!(Balance::new(dec!(0.125)).to_string(), "0.13");
        assert_eq!(Balance::new(dec!(3042.577536)).to_string(), "3042.58");
        assert_eq!(round_to_cents(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_serializes_as_plain_decimal() {
        let balance = Balance::new(dec!(12.5));
        let json = serde_json::to_string(&balance).unwrap();
        let back: Balance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, balance);
    }
}

mod rate_tests {
    use super::*;

    #[test]
    fn test_from_percentage() {
        let rate = Rate::from_percentage(dec!(15));
        assert_eq!(rate.as_decimal(), dec!(0.15));
        assert_eq!(rate.as_percentage(), dec!(15));
    }

    #[test]
    fn test_monthly_divides_by_twelve() {
        let annual = Rate::new(dec!(0.02));
        assert_eq!(annual.monthly().as_decimal(), dec!(0.02) / MONTHS_PER_YEAR);
    }

    #[test]
    fn test_compound_twelve_months() {
        let monthly = Rate::new(dec!(0.10)).monthly();
        let gross = monthly.compound(dec!(5000), 12);
        assert!((gross - dec!(5523.5653)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_zero_rate_compounds_to_identity() {
        assert_eq!(Rate::ZERO.compound(dec!(1234.56), 60), dec!(1234.56));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rate::new(dec!(0.015)).to_string(), "1.5%");
    }
}

mod helper_tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(dec!(-1)), Decimal::ZERO);
        assert_eq!(non_negative(dec!(1)), dec!(1));
        assert_eq!(non_negative(Decimal::ZERO), Decimal::ZERO);
    }
}
