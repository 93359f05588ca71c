//! Brazilian tax document checks
//!
//! CPF (11 digits) identifies individuals and CNPJ (14 digits) identifies
//! corporations. Both end in two mod-11 check digits. Punctuation (`.`, `-`,
//! `/`) and surrounding whitespace are ignored when checking digits; the
//! canonical forms are `000.000.000-00` and `00.000.000/0000-00`.

use serde::{Deserialize, Serialize};

/// Which tax document a string is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in the document
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }

    /// Template of the canonical punctuated form; `9` marks a digit
    fn mask(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "999.999.999-99",
            DocumentKind::Cnpj => "99.999.999/9999-99",
        }
    }
}

/// Outcome of checking a document string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCheck {
    /// Check digits are valid and the string is in canonical form
    Valid,
    /// Check digits are valid but punctuation differs from the canonical form
    NonCanonical,
    /// Wrong number of digits or unexpected characters
    Malformed,
    /// Every digit is the same (e.g. `111.111.111-11`)
    RepeatedDigits,
    /// Check digits do not match
    BadCheckDigits,
}

impl DocumentCheck {
    /// Returns true if the document identifies a real registration
    pub fn is_valid(&self) -> bool {
        matches!(self, DocumentCheck::Valid | DocumentCheck::NonCanonical)
    }
}

/// Checks a CPF or CNPJ string
pub fn check(kind: DocumentKind, document: &str) -> DocumentCheck {
    let document = document.trim();
    let Some(digits) = digits(document) else {
        return DocumentCheck::Malformed;
    };
    if digits.len() != kind.digit_count() {
        return DocumentCheck::Malformed;
    }
    if digits.iter().all(|d| *d == digits[0]) {
        return DocumentCheck::RepeatedDigits;
    }

    let body = kind.digit_count() - 2;
    let first = check_digit(&digits[..body], weights(kind, body));
    let second = check_digit(&digits[..body + 1], weights(kind, body + 1));
    if digits[body] != first || digits[body + 1] != second {
        return DocumentCheck::BadCheckDigits;
    }

    if is_canonical(kind, document) {
        DocumentCheck::Valid
    } else {
        DocumentCheck::NonCanonical
    }
}

/// Formats a document in canonical form, if it has the right number of digits
pub fn format(kind: DocumentKind, document: &str) -> Option<String> {
    let digits = digits(document.trim())?;
    if digits.len() != kind.digit_count() {
        return None;
    }
    let mut next = digits.iter();
    kind.mask()
        .chars()
        .map(|c| match c {
            '9' => next.next().map(|d| char::from(b'0' + d)),
            other => Some(other),
        })
        .collect()
}

/// Extracts digits, skipping punctuation; `None` on any other character
fn digits(document: &str) -> Option<Vec<u8>> {
    document
        .chars()
        .filter(|c| !matches!(c, '.' | '-' | '/'))
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect()
}

/// Weights for a check digit computed over `len` preceding digits
fn weights(kind: DocumentKind, len: usize) -> Vec<u32> {
    match kind {
        // CPF: len+1 down to 2
        DocumentKind::Cpf => (2..=len as u32 + 1).rev().collect(),
        // CNPJ: cycles 9..2 from the right
        DocumentKind::Cnpj => (0..len).rev().map(|i| (i % 8) as u32 + 2).collect(),
    }
}

fn check_digit(digits: &[u8], weights: Vec<u32>) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

fn is_canonical(kind: DocumentKind, document: &str) -> bool {
    let mask = kind.mask();
    document.len() == mask.len()
        && document.chars().zip(mask.chars()).all(|(c, m)| match m {
            '9' => c.is_ascii_digit(),
            punct => c == punct,
        })
}
