//! Portfolio domain errors

use thiserror::Error;

use core_kernel::{ClientId, InvestmentId};
use domain_investment::Investment;

/// Errors that can occur in the portfolio domain
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The investment belongs to a different client than the portfolio
    ///
    /// The investment is handed back untouched so the caller can place it
    /// elsewhere.
    #[error(
        "Investment {} is owned by {}, not by portfolio client {portfolio_client}",
        .rejected.id(),
        .rejected.owner().id()
    )]
    ForeignInvestment {
        rejected: Box<Investment>,
        portfolio_client: ClientId,
    },

    /// No holding with this id exists in the portfolio
    #[error("Investment not found: {0}")]
    InvestmentNotFound(InvestmentId),
}

impl PortfolioError {
    /// Recovers the investment a failed `add_investment` was given
    pub fn into_rejected(self) -> Option<Investment> {
        match self {
            Self::ForeignInvestment { rejected, .. } => Some(*rejected),
            Self::InvestmentNotFound(_) => None,
        }
    }
}
