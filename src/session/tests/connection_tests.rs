//! Service orchestration tests for the wallet session lifecycle.

use std::sync::Arc;

use crate::session::{
    adapters::InMemoryWalletProvider,
    domain::{Account, ChainId, SessionSlot},
    ports::{ProviderError, ProviderEvent},
    services::{ConnectError, ConnectionManager, SessionTransition},
};
use crate::tasks::adapters::InMemoryTaskContract;
use rstest::{fixture, rstest};

const ALICE: &str = "0xa11ce00000000000000000000000000000000001";
const BOB: &str = "0xb0b0000000000000000000000000000000000002";

struct Harness {
    provider: Arc<InMemoryWalletProvider>,
    manager: ConnectionManager<InMemoryWalletProvider>,
}

#[fixture]
fn harness() -> Harness {
    let contract = Arc::new(InMemoryTaskContract::new());
    let provider = Arc::new(InMemoryWalletProvider::new(contract));
    let manager = ConnectionManager::new(Arc::clone(&provider), SessionSlot::new());
    Harness { provider, manager }
}

fn account(raw: &str) -> Account {
    Account::new(raw).expect("valid account address")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restore_returns_none_without_prior_authorization(harness: Harness) {
    let restored = harness.manager.restore().await.expect("restore should succeed");

    assert!(restored.is_none());
    assert!(harness.manager.current().is_none());
    assert_eq!(harness.provider.prompt_count().expect("prompt count"), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restore_establishes_session_without_prompting(harness: Harness) {
    harness
        .provider
        .authorize(vec![account(ALICE)])
        .expect("authorization should be scripted");

    let restored = harness
        .manager
        .restore()
        .await
        .expect("restore should succeed")
        .expect("session should be restored");

    assert_eq!(restored.account(), &account(ALICE));
    assert_eq!(harness.provider.prompt_count().expect("prompt count"), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connect_prompts_once_and_establishes_session(harness: Harness) {
    harness
        .provider
        .grant_on_request(vec![account(ALICE)])
        .expect("grant should be scripted");

    let session = harness.manager.connect().await.expect("connect should succeed");

    assert_eq!(session.account(), &account(ALICE));
    assert_eq!(harness.provider.prompt_count().expect("prompt count"), 1);
    assert!(harness.manager.current().is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connect_surfaces_user_rejection_distinctly(harness: Harness) {
    harness
        .provider
        .reject_next_request()
        .expect("rejection should be scripted");

    let result = harness.manager.connect().await;

    assert!(matches!(
        result,
        Err(ConnectError::Provider(ProviderError::Rejected))
    ));
    assert!(harness.manager.current().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connect_with_empty_grant_reports_no_accounts(harness: Harness) {
    let result = harness.manager.connect().await;

    assert!(matches!(result, Err(ConnectError::NoAccountsGranted)));
    assert!(harness.manager.current().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn connect_without_wallet_reports_unavailable(harness: Harness) {
    harness
        .provider
        .set_unavailable()
        .expect("unavailability should be scripted");

    let result = harness.manager.connect().await;

    assert!(matches!(
        result,
        Err(ConnectError::Provider(ProviderError::Unavailable))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn disconnect_clears_the_session_locally(harness: Harness) {
    harness
        .provider
        .grant_on_request(vec![account(ALICE)])
        .expect("grant should be scripted");
    harness.manager.connect().await.expect("connect should succeed");

    harness.manager.disconnect();

    assert!(harness.manager.current().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn account_change_rebinds_without_a_new_prompt(harness: Harness) {
    harness
        .provider
        .grant_on_request(vec![account(ALICE)])
        .expect("grant should be scripted");
    harness.manager.connect().await.expect("connect should succeed");

    let transition = harness
        .manager
        .apply_event(ProviderEvent::AccountsChanged(vec![account(BOB)]))
        .await
        .expect("event handling should succeed");

    let SessionTransition::Established(session) = transition else {
        panic!("expected an established session transition");
    };
    assert_eq!(session.account(), &account(BOB));
    assert_eq!(harness.provider.prompt_count().expect("prompt count"), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_account_change_tears_the_session_down(harness: Harness) {
    harness
        .provider
        .grant_on_request(vec![account(ALICE)])
        .expect("grant should be scripted");
    harness.manager.connect().await.expect("connect should succeed");

    let transition = harness
        .manager
        .apply_event(ProviderEvent::AccountsChanged(Vec::new()))
        .await
        .expect("event handling should succeed");

    assert!(matches!(transition, SessionTransition::Cleared));
    assert!(harness.manager.current().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn chain_change_invalidates_the_session(harness: Harness) {
    harness
        .provider
        .grant_on_request(vec![account(ALICE)])
        .expect("grant should be scripted");
    harness.manager.connect().await.expect("connect should succeed");

    let transition = harness
        .manager
        .apply_event(ProviderEvent::ChainChanged(ChainId::new(5)))
        .await
        .expect("event handling should succeed");

    let SessionTransition::Invalidated(chain_id) = transition else {
        panic!("expected an invalidated session transition");
    };
    assert_eq!(chain_id, ChainId::new(5));
    assert!(harness.manager.current().is_none());
}
