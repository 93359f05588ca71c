//! Product variants and their shared capabilities
//!
//! The product set is closed: [`Product`] enumerates every variant and
//! dispatches to the [`GrowthRule`] each one implements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Balance;
use domain_client::ClientKind;

use crate::fixed_income::{CorporateBond, FixedRateTreasury};
use crate::fund::InvestmentFund;
use crate::stock::StockPosition;

/// How a product moves a balance through time
pub trait GrowthRule {
    /// Applies one month of growth and fees to the live balance
    fn advance(&self, balance: &mut Balance);

    /// Returns the value after `months` months without touching any state
    ///
    /// Must return `balance` unchanged when `months == 0`.
    fn project(&self, balance: Decimal, months: u32) -> Decimal;
}

/// Which clients may open a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Eligibility {
    /// Open to every client
    AnyClient,
    /// Restricted to one client kind
    Only(ClientKind),
}

impl Eligibility {
    /// Returns true if a client of `kind` may hold the product
    pub fn permits(&self, kind: ClientKind) -> bool {
        self.check(kind).is_ok()
    }

    /// Like [`permits`](Self::permits), but a refusal names the kind that is
    /// required instead
    pub fn check(&self, kind: ClientKind) -> Result<(), ClientKind> {
        match *self {
            Eligibility::Only(required) if required != kind => Err(required),
            _ => Ok(()),
        }
    }
}

/// Discriminant of [`Product`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    FixedRateTreasury,
    StockPosition,
    InvestmentFund,
    CorporateBond,
}

impl ProductKind {
    /// Stable type code used in reports
    pub fn code(&self) -> &'static str {
        match self {
            ProductKind::FixedRateTreasury => "FixedRateTreasury",
            ProductKind::StockPosition => "StockPosition",
            ProductKind::InvestmentFund => "InvestmentFund",
            ProductKind::CorporateBond => "CorporateBond",
        }
    }

    /// Which clients may hold this kind of product
    pub fn eligibility(&self) -> Eligibility {
        match self {
            ProductKind::FixedRateTreasury => Eligibility::Only(ClientKind::Individual),
            ProductKind::CorporateBond => Eligibility::Only(ClientKind::Corporate),
            ProductKind::StockPosition | ProductKind::InvestmentFund => Eligibility::AnyClient,
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductKind::FixedRateTreasury => "Fixed-rate treasury",
            ProductKind::StockPosition => "Stock position",
            ProductKind::InvestmentFund => "Investment fund",
            ProductKind::CorporateBond => "Corporate bond",
        };
        f.write_str(label)
    }
}

/// The product behind an investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Product {
    FixedRateTreasury(FixedRateTreasury),
    StockPosition(StockPosition),
    InvestmentFund(InvestmentFund),
    CorporateBond(CorporateBond),
}

impl Product {
    pub fn kind(&self) -> ProductKind {
        match self {
            Product::FixedRateTreasury(_) => ProductKind::FixedRateTreasury,
            Product::StockPosition(_) => ProductKind::StockPosition,
            Product::InvestmentFund(_) => ProductKind::InvestmentFund,
            Product::CorporateBond(_) => ProductKind::CorporateBond,
        }
    }

    pub fn eligibility(&self) -> Eligibility {
        self.kind().eligibility()
    }

    /// Display name: treasury title, stock ticker, fund name, or bond issuer
    pub fn name(&self) -> &str {
        match self {
            Product::FixedRateTreasury(p) => &p.title,
            Product::StockPosition(p) => &p.ticker,
            Product::InvestmentFund(p) => &p.fund_name,
            Product::CorporateBond(p) => &p.issuer,
        }
    }

    fn rule(&self) -> &dyn GrowthRule {
        match self {
            Product::FixedRateTreasury(p) => p,
            Product::StockPosition(p) => p,
            Product::InvestmentFund(p) => p,
            Product::CorporateBond(p) => p,
        }
    }
}

impl GrowthRule for Product {
    fn advance(&self, balance: &mut Balance) {
        self.rule().advance(balance)
    }

    fn project(&self, balance: Decimal, months: u32) -> Decimal {
        self.rule().project(balance, months)
    }
}

impl From<FixedRateTreasury> for Product {
    fn from(p: FixedRateTreasury) -> Self {
        Product::FixedRateTreasury(p)
    }
}

impl From<StockPosition> for Product {
    fn from(p: StockPosition) -> Self {
        Product::StockPosition(p)
    }
}

impl From<InvestmentFund> for Product {
    fn from(p: InvestmentFund) -> Self {
        Product::InvestmentFund(p)
    }
}

impl From<CorporateBond> for Product {
    fn from(p: CorporateBond) -> Self {
        Product::CorporateBond(p)
    }
}
