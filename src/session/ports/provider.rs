//! Wallet provider port for account access, contract binding, and events.

use crate::session::domain::{Account, ChainId};
use crate::tasks::ports::TaskContract;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// Result type for wallet provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Push notification emitted by the wallet provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    /// The authorized account list changed; the first entry is primary.
    /// An empty list means the provider revoked access entirely.
    AccountsChanged(Vec<Account>),
    /// The provider switched to a different network.
    ChainChanged(ChainId),
}

/// Wallet provider contract.
///
/// The provider is the injected capability through which the connection
/// manager discovers accounts and obtains contract bindings; substituting
/// it is how tests run without a wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Prompts the user to authorize account access.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Rejected`] when the user declines the
    /// prompt, [`ProviderError::Unavailable`] when no wallet is present,
    /// or transport errors.
    async fn request_accounts(&self) -> ProviderResult<Vec<Account>>;

    /// Returns already-authorized accounts without prompting.
    ///
    /// An empty list is the normal result for a wallet that has never
    /// granted access to this client.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Unavailable`] when no wallet is present or
    /// transport errors.
    async fn authorized_accounts(&self) -> ProviderResult<Vec<Account>>;

    /// Binds the task contract to the given account's signer.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the signer cannot be obtained.
    async fn bind(&self, account: &Account) -> ProviderResult<Arc<dyn TaskContract>>;

    /// Subscribes to provider push events.
    ///
    /// Dropping the receiver is the only teardown; providers expose no
    /// per-listener removal.
    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent>;
}

/// Errors surfaced by wallet provider implementations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// No wallet provider is available in the host environment.
    #[error("no wallet provider available")]
    Unavailable,

    /// The user declined the authorization prompt.
    #[error("authorization request rejected by the user")]
    Rejected,

    /// Transport-level failure while talking to the provider.
    #[error("provider transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
