//! Managed investment funds
//!
//! Each month a fund yields 1% of its balance and charges an administration
//! fee of `annual_admin_fee / 12` of its balance. Advancing and projecting
//! share the same recurrence, so `project(n)` equals `n` calls to `advance`
//! for any ordinary fee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{non_negative, Balance, Rate};

use crate::product::GrowthRule;
use crate::FUND_MONTHLY_YIELD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentFund {
    /// Fund name
    pub fund_name: String,
    /// CNPJ of the fund manager
    pub manager_tax_id: String,
    /// Annual administration fee (e.g. 0.02 for 2%)
    pub annual_admin_fee: Rate,
}

impl InvestmentFund {
    pub fn new(fund_name: impl Into<String>, manager_tax_id: impl Into<String>, annual_admin_fee: Decimal) -> Self {
        Self {
            fund_name: fund_name.into(),
            manager_tax_id: manager_tax_id.into(),
            annual_admin_fee: Rate::new(annual_admin_fee),
        }
    }

    /// Balance after one month of yield minus administration fee
    fn next_month(&self, balance: Decimal) -> Decimal {
        let gross_yield = Rate::new(FUND_MONTHLY_YIELD).apply(balance);
        let admin_fee = self.annual_admin_fee.monthly().apply(balance);
        balance.saturating_add(gross_yield).saturating_sub(admin_fee)
    }
}

impl GrowthRule for InvestmentFund {
    fn advance(&self, balance: &mut Balance) {
        let next = self.next_month(balance.amount());
        balance.set(next);
    }

    fn project(&self, balance: Decimal, months: u32) -> Decimal {
        let mut projected = balance;
        for _ in 0..months {
            if projected.is_zero() {
                break;
            }
            projected = self.next_month(projected);
        }
        non_negative(projected)
    }
}
