//! Report error handling

use thiserror::Error;

use domain_client::ClientError;
use domain_investment::InvestmentError;
use domain_portfolio::PortfolioError;

/// Report error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid client: {0}")]
    Client(#[from] ClientError),

    #[error("Investment error: {0}")]
    Investment(#[from] InvestmentError),

    #[error("Portfolio error: {0}")]
    Portfolio(#[from] PortfolioError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
