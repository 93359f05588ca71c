//! Entity identifiers
//!
//! Clients, investments and portfolios are told apart by id, never by field
//! equality. Ids are UUID v7, so ids minted later sort after earlier ones,
//! and they print with a short tag (`CLI-`, `INV-`, `PRT-`) so a log line
//! says which kind of entity it refers to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Failure to read an id back from its printed form
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("expected an id tagged {expected}, got {input:?}")]
    WrongTag { expected: &'static str, input: String },

    #[error("malformed id: {0}")]
    Malformed(#[from] uuid::Error),
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Tag printed in front of the UUID
            pub const TAG: &'static str = $tag;

            /// Mints a fresh id
            pub fn generate() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", Self::TAG, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            /// Parses the tagged form produced by `Display`
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = s
                    .strip_prefix(Self::TAG)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .ok_or_else(|| IdParseError::WrongTag { expected: Self::TAG, input: s.to_string() })?;
                Ok(Self(Uuid::parse_str(uuid)?))
            }
        }
    };
}

entity_id!(
    /// Identity of a client
    ClientId => "CLI"
);
entity_id!(
    /// Identity of one holding
    InvestmentId => "INV"
);
entity_id!(
    /// Identity of a portfolio
    PortfolioId => "PRT"
);
