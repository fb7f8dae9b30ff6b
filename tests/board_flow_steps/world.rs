//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskledger::client::{ClientError, TaskBoardClient};
use taskledger::session::adapters::InMemoryWalletProvider;
use taskledger::tasks::adapters::InMemoryTaskContract;

/// Client type used by the BDD world.
pub type TestBoardClient = TaskBoardClient<InMemoryWalletProvider, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub contract: Arc<InMemoryTaskContract>,
    pub provider: Arc<InMemoryWalletProvider>,
    pub client: TestBoardClient,
    pub last_error: Option<ClientError>,
}

impl BoardWorld {
    /// Creates a world with an empty ledger and a disconnected client.
    #[must_use]
    pub fn new() -> Self {
        let contract = Arc::new(InMemoryTaskContract::new());
        let provider = Arc::new(InMemoryWalletProvider::new(
            Arc::<InMemoryTaskContract>::clone(&contract),
        ));
        let client = TaskBoardClient::new(Arc::clone(&provider), Arc::new(DefaultClock));

        Self {
            contract,
            provider,
            client,
            last_error: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
