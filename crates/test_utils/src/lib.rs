//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! portfolio engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clients and investments from the demo portfolio
//! - `builders`: Builder patterns for test investments
//! - `assertions`: Custom assertion helpers for balances and decimals
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
