//! In-memory wallet provider adapter for session lifecycle tests.

use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use tokio::sync::broadcast;

use crate::session::{
    domain::{Account, ChainId},
    ports::{ProviderError, ProviderEvent, ProviderResult, WalletProvider},
};
use crate::tasks::ports::TaskContract;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// In-memory wallet provider adapter.
///
/// Models provider behaviour without a browser wallet: authorization grants
/// are scripted, prompts are counted so tests can tell the silent restore
/// path from the prompting one, and account or network changes are pushed
/// through the same broadcast channel a real provider would use.
#[derive(Clone)]
pub struct InMemoryWalletProvider {
    state: Arc<RwLock<ProviderState>>,
    events: broadcast::Sender<ProviderEvent>,
    contract: Arc<dyn TaskContract>,
}

#[derive(Debug, Default)]
struct ProviderState {
    authorized: Vec<Account>,
    grantable: Vec<Account>,
    reject_next_request: bool,
    unavailable: bool,
    prompt_count: u64,
}

fn write_locked(
    state: &Arc<RwLock<ProviderState>>,
) -> ProviderResult<RwLockWriteGuard<'_, ProviderState>> {
    state
        .write()
        .map_err(|err| ProviderError::transport(std::io::Error::other(err.to_string())))
}

impl InMemoryWalletProvider {
    /// Creates a provider that binds every account to the given contract.
    #[must_use]
    pub fn new(contract: Arc<dyn TaskContract>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(ProviderState::default())),
            events,
            contract,
        }
    }

    /// Marks accounts as already authorized, enabling the silent restore
    /// path.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn authorize(&self, accounts: Vec<Account>) -> ProviderResult<()> {
        let mut state = write_locked(&self.state)?;
        state.authorized = accounts;
        Ok(())
    }

    /// Scripts the accounts granted when the next prompt is accepted.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn grant_on_request(&self, accounts: Vec<Account>) -> ProviderResult<()> {
        let mut state = write_locked(&self.state)?;
        state.grantable = accounts;
        Ok(())
    }

    /// Makes the user decline the next authorization prompt.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn reject_next_request(&self) -> ProviderResult<()> {
        let mut state = write_locked(&self.state)?;
        state.reject_next_request = true;
        Ok(())
    }

    /// Removes the wallet from the host environment entirely.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_unavailable(&self) -> ProviderResult<()> {
        let mut state = write_locked(&self.state)?;
        state.unavailable = true;
        Ok(())
    }

    /// Returns how many times the authorization prompt was shown.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn prompt_count(&self) -> ProviderResult<u64> {
        let state = self
            .state
            .read()
            .map_err(|err| ProviderError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.prompt_count)
    }

    /// Pushes an account-list change to subscribers, updating the
    /// provider's own authorized list to match.
    ///
    /// Returns the number of live subscribers.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn emit_accounts_changed(&self, accounts: Vec<Account>) -> ProviderResult<usize> {
        let mut state = write_locked(&self.state)?;
        state.authorized.clone_from(&accounts);
        drop(state);
        Ok(self
            .events
            .send(ProviderEvent::AccountsChanged(accounts))
            .unwrap_or_default())
    }

    /// Pushes a network change to subscribers.
    ///
    /// Returns the number of live subscribers.
    #[must_use]
    pub fn emit_chain_changed(&self, chain_id: ChainId) -> usize {
        self.events
            .send(ProviderEvent::ChainChanged(chain_id))
            .unwrap_or_default()
    }
}

impl fmt::Debug for InMemoryWalletProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryWalletProvider")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl WalletProvider for InMemoryWalletProvider {
    async fn request_accounts(&self) -> ProviderResult<Vec<Account>> {
        let mut state = write_locked(&self.state)?;
        if state.unavailable {
            return Err(ProviderError::Unavailable);
        }
        state.prompt_count += 1;
        if state.reject_next_request {
            state.reject_next_request = false;
            return Err(ProviderError::Rejected);
        }
        let granted = state.grantable.clone();
        state.authorized = granted.clone();
        Ok(granted)
    }

    async fn authorized_accounts(&self) -> ProviderResult<Vec<Account>> {
        let state = self
            .state
            .read()
            .map_err(|err| ProviderError::transport(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(ProviderError::Unavailable);
        }
        Ok(state.authorized.clone())
    }

    async fn bind(&self, _account: &Account) -> ProviderResult<Arc<dyn TaskContract>> {
        let state = self
            .state
            .read()
            .map_err(|err| ProviderError::transport(std::io::Error::other(err.to_string())))?;
        if state.unavailable {
            return Err(ProviderError::Unavailable);
        }
        drop(state);
        Ok(Arc::clone(&self.contract))
    }

    fn subscribe(&self) -> broadcast::Receiver<ProviderEvent> {
        self.events.subscribe()
    }
}
