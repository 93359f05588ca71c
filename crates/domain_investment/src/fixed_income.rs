//! Fixed-rate products: treasury titles and corporate bonds
//!
//! Both compound a nominal annual rate monthly (annual / 12). The live balance
//! accrues the full interest each month; tax is charged on the yield only when
//! projecting:
//!
//! ```text
//! gross     = balance * (1 + annual/12)^months
//! yield     = gross - balance
//! projected = balance + yield - yield * tax
//! ```
//!
//! Advancing twelve months therefore ends above `project(12)` whenever the tax
//! rate is positive.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Balance, Rate};

use crate::product::GrowthRule;
use crate::TREASURY_INCOME_TAX_RATE;

/// One month of untaxed accrual
fn accrue(annual_rate: Rate, balance: &mut Balance) {
    let interest = annual_rate.monthly().apply(balance.amount());
    balance.credit(interest);
}

/// Compounded value after `months`, net of tax on the yield
fn project_net_of_tax(annual_rate: Rate, tax_rate: Rate, balance: Decimal, months: u32) -> Decimal {
    let gross = annual_rate.monthly().compound(balance, months);
    let gross_yield = gross.saturating_sub(balance);
    let tax = tax_rate.apply(gross_yield);
    balance.saturating_add(gross_yield).saturating_sub(tax)
}

/// A prefixed-rate government title, restricted to individual clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedRateTreasury {
    /// Title name (e.g. "Tesouro Prefixado 2029")
    pub title: String,
    /// Nominal annual interest rate
    pub annual_rate: Rate,
    /// Income-tax rate on yield, always 15%
    income_tax_rate: Rate,
}

impl FixedRateTreasury {
    pub fn new(title: impl Into<String>, annual_rate: Decimal) -> Self {
        Self {
            title: title.into(),
            annual_rate: Rate::new(annual_rate),
            income_tax_rate: Rate::new(TREASURY_INCOME_TAX_RATE),
        }
    }

    pub fn income_tax_rate(&self) -> Rate {
        self.income_tax_rate
    }
}

impl GrowthRule for FixedRateTreasury {
    fn advance(&self, balance: &mut Balance) {
        accrue(self.annual_rate, balance);
    }

    fn project(&self, balance: Decimal, months: u32) -> Decimal {
        project_net_of_tax(self.annual_rate, self.income_tax_rate, balance, months)
    }
}

/// A debenture issued by a company, restricted to corporate clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateBond {
    /// Issuing company
    pub issuer: String,
    /// Nominal annual interest rate
    pub annual_rate: Rate,
    /// Tax rate on yield, negotiated per bond
    pub tax_rate: Rate,
}

impl CorporateBond {
    pub fn new(issuer: impl Into<String>, annual_rate: Decimal, tax_rate: Decimal) -> Self {
        Self {
            issuer: issuer.into(),
            annual_rate: Rate::new(annual_rate),
            tax_rate: Rate::new(tax_rate),
        }
    }
}

impl GrowthRule for CorporateBond {
    fn advance(&self, balance: &mut Balance) {
        accrue(self.annual_rate, balance);
    }

    fn project(&self, balance: Decimal, months: u32) -> Decimal {
        project_net_of_tax(self.annual_rate, self.tax_rate, balance, months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_treasury_tax_is_fixed() {
        let treasury = FixedRateTreasury::new("Tesouro Prefixado 2029", dec!(0.10));
        assert_eq!(treasury.income_tax_rate().as_decimal(), dec!(0.15));
    }

    #[test]
    fn test_treasury_twelve_month_projection() {
        let treasury = FixedRateTreasury::new("Tesouro Prefixado 2029", dec!(0.10));
        let projected = treasury.project(dec!(5000), 12);

        assert!((projected - dec!(5445.0305)).abs() < dec!(0.0001), "got {}", projected);
    }

    #[test]
    fn test_accrual_is_untaxed() {
        let bond = CorporateBond::new("Empresa ABC", dec!(0.12), dec!(0.20));
        let mut balance = Balance::new(dec!(15000));
        bond.advance(&mut balance);

        assert_eq!(balance.amount(), dec!(15150));
    }

    #[test]
    fn test_zero_months_returns_balance() {
        let bond = CorporateBond::new("Empresa ABC", dec!(0.12), dec!(0.20));
        assert_eq!(bond.project(dec!(15000), 0), dec!(15000));
    }

    #[test]
    fn test_full_tax_projects_principal() {
        let bond = CorporateBond::new("Empresa ABC", dec!(0.12), dec!(1));
        assert!((bond.project(dec!(1000), 24) - dec!(1000)).abs() < dec!(0.000001));
    }
}
