//! User-visible error taxonomy at the presentation boundary.

use crate::session::{ports::ProviderError, services::ConnectError};
use crate::tasks::{
    domain::TaskDomainError,
    ports::ContractError,
    services::{IntentError, SyncError},
};
use std::sync::Arc;
use thiserror::Error;

/// User-visible failure raised by the task board client.
///
/// Every internal failure is flattened into this taxonomy at the facade,
/// keeping the most specific available reason. None of these crash the
/// client; a failed operation leaves the view untouched.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// No wallet is available; terminal until one is installed.
    #[error("no wallet provider available")]
    NoProvider,

    /// The user declined a permission or transaction prompt; safe to
    /// retry.
    #[error("rejected by the user")]
    UserRejected,

    /// The authorization prompt completed but granted no accounts.
    #[error("no accounts granted by the wallet provider")]
    NoAccountsGranted,

    /// The task service refused the state change; nothing was applied.
    #[error("task service rejected the call: {reason}")]
    Reverted {
        /// Revert reason reported by the service.
        reason: String,
    },

    /// Network or RPC failure; the operation may be re-issued.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// An operation was attempted with no active wallet session.
    #[error("no active wallet session")]
    NoActiveSession,

    /// Intent input failed validation; no call was issued.
    #[error(transparent)]
    InvalidIntent(#[from] TaskDomainError),
}

impl From<ProviderError> for ClientError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable => Self::NoProvider,
            ProviderError::Rejected => Self::UserRejected,
            ProviderError::Transport(source) => Self::Transport(source),
        }
    }
}

impl From<ConnectError> for ClientError {
    fn from(err: ConnectError) -> Self {
        match err {
            ConnectError::Provider(source) => source.into(),
            ConnectError::NoAccountsGranted => Self::NoAccountsGranted,
        }
    }
}

impl From<ContractError> for ClientError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Rejected => Self::UserRejected,
            ContractError::Reverted { reason } => Self::Reverted { reason },
            ContractError::Transport(source) => Self::Transport(source),
        }
    }
}

impl From<SyncError> for ClientError {
    fn from(err: SyncError) -> Self {
        let SyncError::Fetch(source) = err;
        source.into()
    }
}

impl From<IntentError> for ClientError {
    fn from(err: IntentError) -> Self {
        match err {
            IntentError::NoActiveSession => Self::NoActiveSession,
            IntentError::Validation(source) => Self::InvalidIntent(source),
            IntentError::Call(source) => source.into(),
            IntentError::Refresh(source) => source.into(),
        }
    }
}
