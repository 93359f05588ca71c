//! Client domain errors

use thiserror::Error;

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client validation failed
    #[error("Client validation failed: {0}")]
    ValidationFailed(String),
}

impl ClientError {
    /// Creates a ValidationFailed error from validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        ClientError::ValidationFailed(errors.join("; "))
    }
}
