//! Client Management Domain
//!
//! This crate models the investors that own holdings in the valuation engine.
//!
//! # Client Kinds
//!
//! - **Individual**: a natural person identified by a CPF
//! - **Corporate**: a legal entity identified by a CNPJ
//!
//! Certain investment products are restricted to one kind of client, so the
//! kind is part of the client's identity and never changes after construction.
//!
//! # Identity
//!
//! Two clients are the same client only if they share a [`ClientId`]. Building
//! two clients from identical names, emails and documents yields two distinct
//! clients.
//!
//! # Examples
//!
//! ```rust
//! use domain_client::{Client, ClientKind};
//!
//! let joao = Client::individual("João Silva", "joao@email.com", "123.456.789-09");
//! assert_eq!(joao.kind(), ClientKind::Individual);
//! assert_eq!(joao.document_id(), "123.456.789-09");
//!
//! let twin = Client::individual("João Silva", "joao@email.com", "123.456.789-09");
//! assert!(!joao.is_same(&twin));
//! ```
//!
//! [`ClientId`]: core_kernel::ClientId

pub mod client;
pub mod document;
pub mod error;
pub mod validation;

pub use client::{Client, ClientDocument, ClientKind};
pub use document::{DocumentKind, DocumentCheck};
pub use error::ClientError;
pub use validation::{ClientValidator, ValidationResult};
