//! Service layer for wallet session lifecycle orchestration.

use crate::session::{
    domain::{Account, ChainId, Session, SessionSlot},
    ports::{ProviderError, ProviderEvent, WalletProvider},
};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

/// Service-level errors for session lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum ConnectError {
    /// Provider interaction failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The authorization prompt completed but granted no accounts.
    #[error("no accounts granted by the wallet provider")]
    NoAccountsGranted,
}

/// Result type for session lifecycle service operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Session change produced by translating a provider push event.
#[derive(Debug, Clone)]
pub enum SessionTransition {
    /// A session was established for the provider's new primary account.
    Established(Session),
    /// The provider revoked all accounts; the client is disconnected.
    Cleared,
    /// The network changed, voiding the deployed-contract assumption;
    /// client state must be rebuilt from scratch.
    Invalidated(ChainId),
}

/// Wallet session lifecycle orchestration service.
///
/// Owns the only write access to the session slot and is the only component
/// that interprets provider events; downstream components read the slot and
/// never mutate it.
#[derive(Clone)]
pub struct ConnectionManager<P>
where
    P: WalletProvider,
{
    provider: Arc<P>,
    slot: SessionSlot,
}

impl<P> ConnectionManager<P>
where
    P: WalletProvider,
{
    /// Creates a new connection manager writing to the given slot.
    #[must_use]
    pub const fn new(provider: Arc<P>, slot: SessionSlot) -> Self {
        Self { provider, slot }
    }

    /// Returns a clone of the current session, if one is active.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.slot.current()
    }

    /// Subscribes to the provider's push events.
    ///
    /// Event interpretation belongs to [`Self::apply_event`]; the receiver
    /// is handed out so the caller controls where the pump runs and when it
    /// is torn down.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<ProviderEvent> {
        self.provider.subscribe()
    }

    /// Restores a session silently from an already-authorized account.
    ///
    /// No prompt is shown; a wallet that never granted access yields
    /// `Ok(None)`. Safe to call repeatedly, including after a network
    /// change reset.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Provider`] when the provider is unavailable
    /// or account lookup or binding fails.
    pub async fn restore(&self) -> ConnectResult<Option<Session>> {
        let accounts = self.provider.authorized_accounts().await?;
        let Some(primary) = accounts.first() else {
            return Ok(None);
        };
        let session = self.establish(primary.clone()).await?;
        Ok(Some(session))
    }

    /// Establishes a session through the provider's authorization prompt.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Rejected`] (wrapped) when the user declines
    /// the prompt, [`ConnectError::NoAccountsGranted`] when the prompt
    /// succeeds but grants nothing, or other provider failures.
    pub async fn connect(&self) -> ConnectResult<Session> {
        let accounts = self.provider.request_accounts().await?;
        let primary = accounts
            .first()
            .cloned()
            .ok_or(ConnectError::NoAccountsGranted)?;
        self.establish(primary).await
    }

    /// Clears the session locally.
    ///
    /// Provider-level authorization is untouched; wallets expose no
    /// revocation call.
    pub fn disconnect(&self) {
        self.slot.clear();
        tracing::info!("wallet session cleared");
    }

    /// Translates a provider push event into a session transition,
    /// applying it to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectError::Provider`] when rebinding to a changed
    /// account fails; the slot keeps its previous session in that case.
    pub async fn apply_event(&self, event: ProviderEvent) -> ConnectResult<SessionTransition> {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.into_iter().next() {
                Some(primary) => {
                    let session = self.establish(primary).await?;
                    Ok(SessionTransition::Established(session))
                }
                None => {
                    self.slot.clear();
                    tracing::info!("provider revoked all accounts");
                    Ok(SessionTransition::Cleared)
                }
            },
            ProviderEvent::ChainChanged(chain_id) => {
                self.slot.clear();
                tracing::info!(%chain_id, "network changed, session invalidated");
                Ok(SessionTransition::Invalidated(chain_id))
            }
        }
    }

    /// Binds the account and swaps the resulting session into the slot.
    async fn establish(&self, account: Account) -> ConnectResult<Session> {
        let contract = self.provider.bind(&account).await?;
        let session = Session::new(account, contract);
        self.slot.replace(session.clone());
        tracing::info!(account = %session.account(), "wallet session established");
        Ok(session)
    }
}
