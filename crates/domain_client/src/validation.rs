//! Client validation rules
//!
//! Construction of a [`Client`] never fails: the engine takes names, emails and
//! documents as supplied. Callers that want data-quality checks run the
//! validator separately.
//!
//! # Validation Rules
//!
//! ## All Clients
//! - Name must not be empty
//! - Email must be a well-formed address
//!
//! ## Individual Clients
//! - CPF must have 11 digits with valid check digits
//!
//! ## Corporate Clients
//! - CNPJ must have 14 digits with valid check digits
//!
//! A document with valid digits but non-canonical punctuation produces a
//! warning, not an error.

use validator::Validate;

use crate::client::{Client, ClientDocument};
use crate::document::{self, DocumentCheck, DocumentKind};
use crate::error::ClientError;

/// Result of client validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the client is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for client entities
///
/// # Examples
///
/// ```rust
/// use domain_client::{Client, ClientValidator};
///
/// let client = Client::individual("João Silva", "joao@email.com", "123.456.789-00");
/// let result = ClientValidator::validate(&client);
///
/// assert!(!result.is_valid);
/// assert!(result.errors[0].contains("check digits"));
/// ```
pub struct ClientValidator;

impl ClientValidator {
    /// Validates a client's contact data and tax document
    pub fn validate(client: &Client) -> ValidationResult {
        let mut result = ValidationResult::ok();

        Self::validate_contact(client, &mut result);

        match client.document() {
            ClientDocument::Individual { cpf } => {
                Self::validate_document(DocumentKind::Cpf, cpf, &mut result)
            }
            ClientDocument::Corporate { cnpj } => {
                Self::validate_document(DocumentKind::Cnpj, cnpj, &mut result)
            }
        }

        result
    }

    /// Validates a client, converting any errors into a [`ClientError`]
    pub fn ensure_valid(client: &Client) -> Result<ValidationResult, ClientError> {
        let result = Self::validate(client);
        if result.is_valid {
            Ok(result)
        } else {
            Err(ClientError::validation_failed(result.errors))
        }
    }

    /// Runs the field rules declared on [`Client`]
    fn validate_contact(client: &Client, result: &mut ValidationResult) {
        let Err(errors) = client.validate() else {
            return;
        };

        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid {}: {}", field, error.code),
                })
            })
            .collect();
        // field_errors is a HashMap
        messages.sort();

        for message in messages {
            result.add_error(message);
        }
    }

    fn validate_document(kind: DocumentKind, value: &str, result: &mut ValidationResult) {
        let label = kind.label();
        match document::check(kind, value) {
            DocumentCheck::Valid => {}
            DocumentCheck::NonCanonical => {
                let canonical = document::format(kind, value).unwrap_or_default();
                result.add_warning(format!("{} {} is not in canonical form {}", label, value, canonical));
            }
            DocumentCheck::Malformed => {
                result.add_error(format!(
                    "{} {} must have {} digits",
                    label,
                    value,
                    kind.digit_count()
                ));
            }
            DocumentCheck::RepeatedDigits => {
                result.add_error(format!("{} {} cannot repeat a single digit", label, value));
            }
            DocumentCheck::BadCheckDigits => {
                result.add_error(format!("{} {} has invalid check digits", label, value));
            }
        }
    }
}
