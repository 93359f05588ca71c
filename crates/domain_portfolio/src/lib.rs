//! Portfolio Domain
//!
//! A portfolio holds the investments of exactly one client. It enforces the
//! membership invariant (every holding is owned by the portfolio's client)
//! and aggregates current and projected values.
//!
//! # Invariants
//!
//! - Every investment in the collection is owned by the portfolio's client
//! - Holdings keep their insertion order and are never removed
//! - A rejected insert leaves the portfolio unchanged

pub mod portfolio;
pub mod error;

pub use portfolio::{HoldingProjection, Portfolio};
pub use error::PortfolioError;
