//! Listed stock positions
//!
//! A position appreciates a fixed 0.8% per month and pays a fixed brokerage
//! fee per month regardless of its size.
//!
//! The step and the projection use different formulas. Advancing
//! clamps after every month and compounds on the fee-reduced balance; the
//! projection subtracts `fee * months` from the compounded balance and clamps
//! once at the end. For a 3000 position with a fee of 10, three steps give
//! 3042.336896 while `project(3)` gives 3042.577536.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{non_negative, Balance, Rate};

use crate::product::GrowthRule;
use crate::STOCK_MONTHLY_APPRECIATION;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    /// Exchange ticker (e.g. "PETR4")
    pub ticker: String,
    /// Issuing company name
    pub company_name: String,
    /// Brokerage fee charged every month
    pub monthly_fee: Decimal,
}

impl StockPosition {
    pub fn new(ticker: impl Into<String>, company_name: impl Into<String>, monthly_fee: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
            monthly_fee,
        }
    }

    fn appreciation() -> Rate {
        Rate::new(STOCK_MONTHLY_APPRECIATION)
    }
}

impl GrowthRule for StockPosition {
    fn advance(&self, balance: &mut Balance) {
        balance.scale(Self::appreciation().compound_factor(1));
        balance.debit(self.monthly_fee);
    }

    fn project(&self, balance: Decimal, months: u32) -> Decimal {
        let appreciated = Self::appreciation().compound(balance, months);
        let fees = self.monthly_fee.saturating_mul(Decimal::from(months));
        non_negative(appreciated.saturating_sub(fees))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn petr4() -> StockPosition {
        StockPosition::new("PETR4", "Petrobras PN", dec!(10))
    }

    #[test]
    fn test_single_step() {
        let mut balance = Balance::new(dec!(3000));
        petr4().advance(&mut balance);
        assert_eq!(balance.amount(), dec!(3014));
    }

    #[test]
    fn test_projection_closed_form() {
        assert_eq!(petr4().project(dec!(3000), 3), dec!(3042.577536));
    }

    #[test]
    fn test_step_clamps_every_month() {
        let mut balance = Balance::new(dec!(5));
        petr4().advance(&mut balance);
        assert!(balance.is_zero());
        petr4().advance(&mut balance);
        assert!(balance.is_zero());
    }

    #[test]
    fn test_projection_clamps_at_end() {
        assert_eq!(petr4().project(dec!(5), 12), Decimal::ZERO);
    }
}
