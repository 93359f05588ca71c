//! Investment Domain
//!
//! This crate implements the valuation engine for a client's holdings: the
//! product rules, the monthly accrual step, and the pure projection.
//!
//! # Key Concepts
//!
//! - **Investment**: a holding owned by one client, with a non-negative balance
//!   and a product that decides how the balance evolves
//! - **Advance one month**: mutates the live balance by one month of the
//!   product's growth and fee rule
//! - **Projection**: the balance after N months, computed without mutation
//! - **Eligibility**: some products may only be opened by one kind of client
//!
//! # Products
//!
//! | Product | Monthly rule | Eligibility |
//! |---|---|---|
//! | [`FixedRateTreasury`] | annual/12 compounding, 15% tax on projected yield | individual |
//! | [`StockPosition`] | +0.8%, minus a fixed brokerage fee | any |
//! | [`InvestmentFund`] | +1% yield, minus annual/12 admin fee | any |
//! | [`CorporateBond`] | annual/12 compounding, caller-supplied tax on projected yield | corporate |
//!
//! Fixed-income products accrue the full interest every month; tax is only
//! netted out of projections.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use domain_client::Client;
//! use domain_investment::Investment;
//! use rust_decimal_macros::dec;
//!
//! let owner = Arc::new(Client::individual("João Silva", "joao@email.com", "123.456.789-09"));
//! let mut fund = Investment::investment_fund(owner, dec!(8000), "Fundo Alfa", "00.000.000/0001-91", dec!(0.02));
//!
//! let projected = fund.project_balance(1);
//! fund.advance_one_month();
//! assert_eq!(fund.balance(), projected);
//! ```

pub mod product;
pub mod fixed_income;
pub mod stock;
pub mod fund;
pub mod investment;
pub mod error;

pub use product::{Eligibility, GrowthRule, Product, ProductKind};
pub use fixed_income::{CorporateBond, FixedRateTreasury};
pub use stock::StockPosition;
pub use fund::InvestmentFund;
pub use investment::Investment;
pub use error::InvestmentError;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Income-tax rate withheld from treasury yield (15%)
pub const TREASURY_INCOME_TAX_RATE: Decimal = dec!(0.15);

/// Fixed monthly appreciation of a stock position (0.8%)
pub const STOCK_MONTHLY_APPRECIATION: Decimal = dec!(0.008);

/// Gross monthly yield of an investment fund (1%)
pub const FUND_MONTHLY_YIELD: Decimal = dec!(0.01);
