//! Test Data Builders
//!
//! Provides a builder for investments so tests only spell out the fields they
//! care about. Products default to the demo portfolio's parameters.

use std::sync::Arc;

use domain_client::Client;
use domain_investment::{
    CorporateBond, FixedRateTreasury, Investment, InvestmentError, InvestmentFund, Product,
    StockPosition,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::ClientFixtures;

/// Builder for constructing test investments
pub struct TestInvestmentBuilder {
    owner: Arc<Client>,
    initial_balance: Decimal,
    product: Product,
}

impl Default for TestInvestmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvestmentBuilder {
    /// Creates a new builder: a 1000 stock position owned by an individual
    pub fn new() -> Self {
        Self {
            owner: ClientFixtures::individual(),
            initial_balance: dec!(1000),
            product: StockPosition::new("PETR4", "Petrobras PN", dec!(10)).into(),
        }
    }

    /// Starts from a treasury title at 10% a year
    pub fn treasury() -> Self {
        Self::new().with_product(FixedRateTreasury::new("Tesouro Prefixado 2029", dec!(0.10)))
    }

    /// Starts from a stock position with a fee of 10
    pub fn stock() -> Self {
        Self::new()
    }

    /// Starts from a fund with a 2% admin fee
    pub fn fund() -> Self {
        Self::new().with_product(InvestmentFund::new("Fundo Alfa", "00.000.000/0001-91", dec!(0.02)))
    }

    /// Starts from a corporate bond at 12% a year with 20% tax, owned by a company
    pub fn bond() -> Self {
        Self::new()
            .with_owner(ClientFixtures::corporate())
            .with_product(CorporateBond::new("Empresa ABC", dec!(0.12), dec!(0.20)))
    }

    /// Sets the owner
    pub fn with_owner(mut self, owner: Arc<Client>) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the opening balance
    pub fn with_balance(mut self, balance: Decimal) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Sets the product
    pub fn with_product(mut self, product: impl Into<Product>) -> Self {
        self.product = product.into();
        self
    }

    /// Builds the investment, surfacing eligibility errors
    pub fn try_build(self) -> Result<Investment, InvestmentError> {
        Investment::new(self.owner, self.initial_balance, self.product)
    }

    /// Builds the investment
    ///
    /// # Panics
    ///
    /// Panics if the owner is not eligible for the product
    pub fn build(self) -> Investment {
        self.try_build().expect("test investment owner must be eligible")
    }
}
