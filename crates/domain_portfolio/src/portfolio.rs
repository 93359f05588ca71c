//! Portfolio aggregate
//!
//! The portfolio owns its holdings outright. Callers reach a holding through
//! [`Portfolio::investment_mut`] (or the `apply_to`/`withdraw_from` shortcuts)
//! instead of keeping their own handle to it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use core_kernel::{InvestmentId, PortfolioId};
use domain_client::Client;
use domain_investment::{Investment, ProductKind};

use crate::error::PortfolioError;

/// Current and projected value of one holding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingProjection {
    pub investment_id: InvestmentId,
    pub kind: ProductKind,
    pub name: String,
    pub months: u32,
    pub current_balance: Decimal,
    pub projected_balance: Decimal,
}

/// The investments of a single client
///
/// # Invariants
///
/// - Every held investment is owned by `client` (checked by identity)
/// - Insertion order is preserved; there is no removal
#[derive(Debug)]
pub struct Portfolio {
    id: PortfolioId,
    client: Arc<Client>,
    investments: Vec<Investment>,
    created_at: DateTime<Utc>,
}

impl Portfolio {
    /// Creates an empty portfolio for `client`
    pub fn new(client: Arc<Client>) -> Self {
        Self {
            id: PortfolioId::generate(),
            client,
            investments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> PortfolioId {
        self.id
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Holdings in insertion order
    pub fn investments(&self) -> &[Investment] {
        &self.investments
    }

    pub fn len(&self) -> usize {
        self.investments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investments.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether `investment` is owned by this portfolio's client
    pub fn accepts(&self, investment: &Investment) -> bool {
        investment.is_owned_by(&self.client)
    }

    /// Appends an investment owned by this portfolio's client
    ///
    /// # Returns
    ///
    /// The id under which the holding can be retrieved
    ///
    /// # Errors
    ///
    /// Returns `ForeignInvestment` if the owner differs. The portfolio is left
    /// untouched and the investment rides back inside the error (see
    /// [`PortfolioError::into_rejected`]).
    pub fn add_investment(&mut self, investment: Investment) -> Result<InvestmentId, PortfolioError> {
        if !self.accepts(&investment) {
            return Err(PortfolioError::ForeignInvestment {
                rejected: Box::new(investment),
                portfolio_client: self.client.id(),
            });
        }

        let id = investment.id();
        self.investments.push(investment);
        Ok(id)
    }

    pub fn investment(&self, id: InvestmentId) -> Option<&Investment> {
        self.investments.iter().find(|i| i.id() == id)
    }

    pub fn investment_mut(&mut self, id: InvestmentId) -> Option<&mut Investment> {
        self.investments.iter_mut().find(|i| i.id() == id)
    }

    /// Deposits into a holding; see [`Investment::apply`] for the no-op rules
    pub fn apply_to(&mut self, id: InvestmentId, amount: Decimal) -> Result<bool, PortfolioError> {
        self.investment_mut(id)
            .map(|investment| investment.apply(amount))
            .ok_or(PortfolioError::InvestmentNotFound(id))
    }

    /// Withdraws from a holding; see [`Investment::withdraw`] for the no-op rules
    pub fn withdraw_from(&mut self, id: InvestmentId, amount: Decimal) -> Result<bool, PortfolioError> {
        self.investment_mut(id)
            .map(|investment| investment.withdraw(amount))
            .ok_or(PortfolioError::InvestmentNotFound(id))
    }

    /// Sum of current balances (zero when empty)
    pub fn total_invested_value(&self) -> Decimal {
        self.investments
            .iter()
            .fold(Decimal::ZERO, |total, i| total.saturating_add(i.balance()))
    }

    /// Advances every holding by one month, in insertion order
    pub fn advance_all_one_month(&mut self) {
        for investment in &mut self.investments {
            investment.advance_one_month();
        }
    }

    /// Projects every holding `months` ahead without mutating anything
    pub fn projections(&self, months: u32) -> Vec<HoldingProjection> {
        self.investments
            .iter()
            .map(|investment| HoldingProjection {
                investment_id: investment.id(),
                kind: investment.kind(),
                name: investment.name().to_string(),
                months,
                current_balance: investment.balance(),
                projected_balance: investment.project_balance(months),
            })
            .collect()
    }

    /// Sum of every holding's projection `months` ahead
    pub fn total_projected_value(&self, months: u32) -> Decimal {
        self.investments
            .iter()
            .fold(Decimal::ZERO, |total, i| total.saturating_add(i.project_balance(months)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn client() -> Arc<Client> {
        Arc::new(Client::individual("João Silva", "joao@email.com", "123.456.789-09"))
    }

    #[test]
    fn test_empty_portfolio() {
        let portfolio = Portfolio::new(client());

        assert!(portfolio.is_empty());
        assert_eq!(portfolio.total_invested_value(), Decimal::ZERO);
        assert_eq!(portfolio.total_projected_value(12), Decimal::ZERO);
    }

    #[test]
    fn test_foreign_investment_rejected() {
        let mut portfolio = Portfolio::new(client());
        let stranger = client();
        let stock = Investment::stock_position(stranger, dec!(3000), "PETR4", "Petrobras PN", dec!(10));

        let stock_id = stock.id();

        let rejected = portfolio.add_investment(stock).unwrap_err().into_rejected();

        assert_eq!(rejected.map(|i| i.id()), Some(stock_id));
        assert_eq!(portfolio.len(), 0);
    }

    #[test]
    fn test_apply_to_unknown_holding() {
        let mut portfolio = Portfolio::new(client());
        let missing = InvestmentId::generate();

        assert!(matches!(
            portfolio.apply_to(missing, dec!(10)),
            Err(PortfolioError::InvestmentNotFound(id)) if id == missing
        ));
    }
}
