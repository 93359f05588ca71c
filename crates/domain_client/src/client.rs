//! Client entity
//!
//! A client is an immutable identity record. The variant-specific document
//! (CPF for individuals, CNPJ for corporations) is carried by
//! [`ClientDocument`], and [`ClientKind`] is its field-less projection used by
//! eligibility rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use core_kernel::ClientId;

/// The legal-person kind of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientKind {
    /// A natural person (pessoa física)
    Individual,
    /// A legal entity (pessoa jurídica)
    Corporate,
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientKind::Individual => write!(f, "individual"),
            ClientKind::Corporate => write!(f, "corporate"),
        }
    }
}

/// The tax document that identifies a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClientDocument {
    /// Personal tax id
    Individual { cpf: String },
    /// Corporate tax id
    Corporate { cnpj: String },
}

impl ClientDocument {
    /// Returns the raw document identifier as supplied at construction
    pub fn id(&self) -> &str {
        match self {
            ClientDocument::Individual { cpf } => cpf,
            ClientDocument::Corporate { cnpj } => cnpj,
        }
    }

    /// Returns the client kind this document belongs to
    pub fn kind(&self) -> ClientKind {
        match self {
            ClientDocument::Individual { .. } => ClientKind::Individual,
            ClientDocument::Corporate { .. } => ClientKind::Corporate,
        }
    }
}

/// An investor that can own holdings
///
/// Fields are private: a client never changes after construction. Cloning a
/// client keeps its id, so a clone is the same client.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Client {
    id: ClientId,
    #[validate(length(min = 1, message = "Client name is required"))]
    name: String,
    #[validate(email(message = "Client email is not a valid address"))]
    email: String,
    document: ClientDocument,
    created_at: DateTime<Utc>,
}

impl Client {
    /// Creates a client from its document
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `email` - Contact email
    /// * `document` - The CPF or CNPJ, which also fixes the client kind
    pub fn new(name: impl Into<String>, email: impl Into<String>, document: ClientDocument) -> Self {
        Self {
            id: ClientId::generate(),
            name: name.into(),
            email: email.into(),
            document,
            created_at: Utc::now(),
        }
    }

    /// Creates an individual client identified by a CPF
    pub fn individual(name: impl Into<String>, email: impl Into<String>, cpf: impl Into<String>) -> Self {
        Self::new(name, email, ClientDocument::Individual { cpf: cpf.into() })
    }

    /// Creates a corporate client identified by a CNPJ
    pub fn corporate(name: impl Into<String>, email: impl Into<String>, cnpj: impl Into<String>) -> Self {
        Self::new(name, email, ClientDocument::Corporate { cnpj: cnpj.into() })
    }

    /// Returns the client's identity
    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the variant-specific document identifier (CPF or CNPJ)
    pub fn document_id(&self) -> &str {
        self.document.id()
    }

    pub fn document(&self) -> &ClientDocument {
        &self.document
    }

    pub fn kind(&self) -> ClientKind {
        self.document.kind()
    }

    pub fn is_individual(&self) -> bool {
        self.kind() == ClientKind::Individual
    }

    pub fn is_corporate(&self) -> bool {
        self.kind() == ClientKind::Corporate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if `other` is the same client (identity, not field equality)
    pub fn is_same(&self, other: &Client) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.document_id())
    }
}
