//! Shared fixtures for task service tests.

use std::sync::Arc;

use crate::session::domain::{Account, Session, SessionSlot};
use crate::tasks::{
    domain::{Task, TaskId},
    ports::{ContractResult, PendingCall, TaskContract},
};

pub const ALICE: &str = "0xa11ce00000000000000000000000000000000001";

mockall::mock! {
    /// Contract double for call-count and failure-path assertions.
    pub Contract {}

    #[async_trait::async_trait]
    impl TaskContract for Contract {
        async fn get_all_tasks(&self) -> ContractResult<Vec<Task>>;
        async fn add_task(&self, title: &str, description: &str) -> ContractResult<PendingCall>;
        async fn mark_task_completed(&self, id: TaskId) -> ContractResult<PendingCall>;
        async fn edit_task(
            &self,
            id: TaskId,
            title: &str,
            description: &str,
        ) -> ContractResult<PendingCall>;
        async fn delete_task(&self, id: TaskId) -> ContractResult<PendingCall>;
    }
}

/// Builds a slot holding a session bound to the given contract.
pub fn connected_slot(contract: Arc<dyn TaskContract>) -> SessionSlot {
    let account = Account::new(ALICE).expect("valid account address");
    let slot = SessionSlot::new();
    slot.replace(Session::new(account, contract));
    slot
}
