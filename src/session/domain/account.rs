//! Identity types for the wallet session domain.

use super::SessionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wallet account address in `0x`-prefixed hexadecimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    const PREFIX_LEN: usize = 6;
    const SUFFIX_LEN: usize = 4;

    /// Creates a validated account address.
    ///
    /// Letter case is preserved as provided; checksummed and lowercase forms
    /// are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SessionDomainError::InvalidAccountAddress`] when the value
    /// is not a `0x`-prefixed 40-digit hexadecimal string.
    pub fn new(value: impl Into<String>) -> Result<Self, SessionDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let is_valid = normalized
            .strip_prefix("0x")
            .is_some_and(|digits| digits.len() == 40 && digits.chars().all(|ch| ch.is_ascii_hexdigit()));

        if !is_valid {
            return Err(SessionDomainError::InvalidAccountAddress(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the account address as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the shortened presentation form, `0x1234…abcd`.
    #[must_use]
    pub fn shortened(&self) -> String {
        let head = self.0.get(..Self::PREFIX_LEN);
        let tail = self.0.get(self.0.len() - Self::SUFFIX_LEN..);
        match (head, tail) {
            (Some(prefix), Some(suffix)) => format!("{prefix}…{suffix}"),
            _ => self.0.clone(),
        }
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of the network the provider is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(u64);

impl ChainId {
    /// Wraps a provider-reported chain identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
