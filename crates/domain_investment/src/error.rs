//! Investment domain errors

use thiserror::Error;

use domain_client::ClientKind;

use crate::product::ProductKind;

/// Errors that can occur in the investment domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvestmentError {
    /// The product may not be opened by this kind of client
    #[error("{product} is exclusive to {required} clients (owner is {actual})")]
    InvalidEligibility {
        product: ProductKind,
        required: ClientKind,
        actual: ClientKind,
    },
}

impl InvestmentError {
    /// Creates an InvalidEligibility error
    pub fn ineligible(product: ProductKind, required: ClientKind, actual: ClientKind) -> Self {
        InvestmentError::InvalidEligibility { product, required, actual }
    }
}
