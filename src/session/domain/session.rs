//! Session value and the shared slot it is swapped through.

use super::Account;
use crate::tasks::ports::TaskContract;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Connection state exposed to presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// No wallet session is active.
    #[default]
    Disconnected,
    /// A wallet session is active for the given account.
    Connected {
        /// The session's account address.
        account: Account,
    },
}

impl ConnectionStatus {
    /// Whether a session is active.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Returns the connected account, if any.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        match self {
            Self::Connected { account } => Some(account),
            Self::Disconnected => None,
        }
    }
}

/// The authenticated identity: an account and the contract binding bound
/// to it.
///
/// The two fields are constructed together and replaced together; a session
/// with an account but no usable binding is unrepresentable.
#[derive(Clone)]
pub struct Session {
    account: Account,
    contract: Arc<dyn TaskContract>,
}

impl Session {
    /// Binds an account to its contract handle.
    #[must_use]
    pub fn new(account: Account, contract: Arc<dyn TaskContract>) -> Self {
        Self { account, contract }
    }

    /// Returns the session's account.
    #[must_use]
    pub const fn account(&self) -> &Account {
        &self.account
    }

    /// Returns the contract binding for this session.
    #[must_use]
    pub const fn contract(&self) -> &Arc<dyn TaskContract> {
        &self.contract
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

/// Shared handle to the current session.
///
/// The connection manager swaps the content wholesale; every other component
/// only reads. An intent holding a clone of a replaced session keeps using
/// its old binding and fails naturally.
#[derive(Debug, Clone, Default)]
pub struct SessionSlot {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionSlot {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the current session, if one is active.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a session is currently active.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Swaps in a new session.
    pub fn replace(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Clears the slot, leaving the client disconnected.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
