//! Investment entity
//!
//! An investment ties a product to the client that owns it and carries the
//! live balance. The owner is shared (`Arc<Client>`) and never owned by the
//! investment; the client does not track its investments.
//!
//! # Balance Rules
//!
//! - `apply` credits positive amounts and silently ignores anything else
//! - `withdraw` debits amounts in `(0, balance]` and silently ignores anything else
//! - every write goes through [`Balance`], which clamps at zero

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;

use core_kernel::{Balance, InvestmentId};
use domain_client::Client;

use crate::error::InvestmentError;
use crate::fixed_income::{CorporateBond, FixedRateTreasury};
use crate::fund::InvestmentFund;
use crate::product::{GrowthRule, Product, ProductKind};
use crate::stock::StockPosition;

/// A client's holding in one product
///
/// Serializes with the owner nested as a full client record.
#[derive(Debug, Serialize)]
pub struct Investment {
    id: InvestmentId,
    owner: Arc<Client>,
    balance: Balance,
    product: Product,
    opened_at: DateTime<Utc>,
}

impl Investment {
    /// Opens an investment after checking the product's eligibility rule
    ///
    /// # Arguments
    ///
    /// * `owner` - The client that owns the holding
    /// * `initial_balance` - Opening balance; negative amounts are clamped to zero
    /// * `product` - Product parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidEligibility` if the product is restricted to another
    /// client kind. Eligibility is only ever checked here.
    pub fn new(
        owner: Arc<Client>,
        initial_balance: Decimal,
        product: impl Into<Product>,
    ) -> Result<Self, InvestmentError> {
        let product = product.into();

        product
            .eligibility()
            .check(owner.kind())
            .map_err(|required| InvestmentError::ineligible(product.kind(), required, owner.kind()))?;

        Ok(Self::open(owner, initial_balance, product))
    }

    fn open(owner: Arc<Client>, initial_balance: Decimal, product: Product) -> Self {
        Self {
            id: InvestmentId::generate(),
            owner,
            balance: Balance::new(initial_balance),
            product,
            opened_at: Utc::now(),
        }
    }

    /// Opens a fixed-rate treasury title (individual clients only)
    pub fn fixed_rate_treasury(
        owner: Arc<Client>,
        initial_balance: Decimal,
        title: impl Into<String>,
        annual_rate: Decimal,
    ) -> Result<Self, InvestmentError> {
        Self::new(owner, initial_balance, FixedRateTreasury::new(title, annual_rate))
    }

    /// Opens a stock position
    pub fn stock_position(
        owner: Arc<Client>,
        initial_balance: Decimal,
        ticker: impl Into<String>,
        company_name: impl Into<String>,
        monthly_fee: Decimal,
    ) -> Self {
        let product = StockPosition::new(ticker, company_name, monthly_fee);
        Self::open(owner, initial_balance, product.into())
    }

    /// Opens a position in an investment fund
    pub fn investment_fund(
        owner: Arc<Client>,
        initial_balance: Decimal,
        fund_name: impl Into<String>,
        manager_tax_id: impl Into<String>,
        annual_admin_fee: Decimal,
    ) -> Self {
        let product = InvestmentFund::new(fund_name, manager_tax_id, annual_admin_fee);
        Self::open(owner, initial_balance, product.into())
    }

    /// Opens a corporate bond (corporate clients only)
    pub fn corporate_bond(
        owner: Arc<Client>,
        initial_balance: Decimal,
        issuer: impl Into<String>,
        annual_rate: Decimal,
        tax_rate: Decimal,
    ) -> Result<Self, InvestmentError> {
        Self::new(owner, initial_balance, CorporateBond::new(issuer, annual_rate, tax_rate))
    }

    pub fn id(&self) -> InvestmentId {
        self.id
    }

    pub fn owner(&self) -> &Arc<Client> {
        &self.owner
    }

    /// Returns true if `client` is the owner (identity, not field equality)
    pub fn is_owned_by(&self, client: &Client) -> bool {
        self.owner.is_same(client)
    }

    /// Current balance, never negative
    pub fn balance(&self) -> Decimal {
        self.balance.amount()
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn kind(&self) -> ProductKind {
        self.product.kind()
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Deposits `amount`. Returns false, leaving the balance untouched, when
    /// `amount` is not positive.
    pub fn apply(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO {
            return false;
        }
        self.balance.credit(amount);
        true
    }

    /// Withdraws `amount`. Returns false, leaving the balance untouched, when
    /// `amount` is not positive or exceeds the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        if amount <= Decimal::ZERO || amount > self.balance.amount() {
            return false;
        }
        self.balance.debit(amount);
        true
    }

    /// Applies one month of the product's growth and fee rule to the balance
    pub fn advance_one_month(&mut self) {
        self.product.advance(&mut self.balance);
    }

    /// Returns the balance after `months` months without mutating anything
    pub fn project_balance(&self, months: u32) -> Decimal {
        self.product.project(self.balance.amount(), months)
    }
}
