//! Domain-level errors (no I/O concerns)

use std::fmt;

use thiserror::Error;

/// Domain errors represent violations of the claim-set structure.
/// They are independent of how the claims reached the core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("claim {claim} references missing claim {reference}")]
    DanglingReference { claim: u32, reference: u32 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// A dangling reference recorded during a lenient build: `claim` cited
/// `reference`, but no claim with that number was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceFault {
    pub claim: u32,
    pub reference: u32,
}

impl fmt::Display for ReferenceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "claim {} references missing claim {}",
            self.claim, self.reference
        )
    }
}
