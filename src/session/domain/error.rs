//! Error types for session domain validation.

use thiserror::Error;

/// Errors returned while constructing session domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionDomainError {
    /// The account address is not `0x`-prefixed 40-digit hexadecimal.
    #[error("invalid account address '{0}', expected 0x-prefixed 40-digit hex")]
    InvalidAccountAddress(String),
}
