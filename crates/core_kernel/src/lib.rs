//! Core Kernel - Foundational types for the portfolio valuation engine
//!
//! This crate provides the building blocks shared by every domain crate:
//! - Strongly-typed identifiers for clients, investments and portfolios
//! - A `Balance` type that can never hold a negative amount
//! - A `Rate` type with monthly conversion and compounding helpers

pub mod money;
pub mod identifiers;

pub use money::{Balance, Rate, non_negative, round_to_cents, MONTHS_PER_YEAR};
pub use identifiers::{ClientId, IdParseError, InvestmentId, PortfolioId};
