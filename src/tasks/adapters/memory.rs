//! In-memory contract adapter simulating the ledger-backed task service.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::tasks::{
    domain::{Task, TaskId},
    ports::{CallKind, CallReceipt, ContractError, ContractResult, PendingCall, TaskContract},
};

/// In-memory task contract adapter.
///
/// This adapter models the service's ledger semantics without any network:
/// identifiers are assigned at confirmation time starting from 1, deletion
/// vacates the row in place (leaving a sentinel entry readers must filter),
/// and every mutation applies only when its [`PendingCall`] is confirmed.
/// Failure injection covers fetches, submissions, and confirmations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskContract {
    state: Arc<RwLock<LedgerState>>,
}

#[derive(Debug, Default)]
struct LedgerState {
    rows: Vec<Task>,
    last_id: u64,
    last_reference: u64,
    fetch_failure: Option<ContractError>,
    submit_failure: Option<ContractError>,
    confirm_failure: Option<ContractError>,
}

impl LedgerState {
    fn assign_id(&mut self) -> TaskId {
        self.last_id += 1;
        TaskId::new(self.last_id)
    }

    fn assign_reference(&mut self) -> String {
        self.last_reference += 1;
        format!("0x{:064x}", self.last_reference)
    }
}

fn write_locked(
    state: &Arc<RwLock<LedgerState>>,
) -> ContractResult<RwLockWriteGuard<'_, LedgerState>> {
    state
        .write()
        .map_err(|err| ContractError::transport(std::io::Error::other(err.to_string())))
}

fn take_confirm_failure(state: &Arc<RwLock<LedgerState>>) -> ContractResult<()> {
    let mut ledger = write_locked(state)?;
    ledger.confirm_failure.take().map_or(Ok(()), Err)
}

fn find_row<'a>(ledger: &'a mut LedgerState, id: TaskId) -> ContractResult<&'a mut Task> {
    ledger
        .rows
        .iter_mut()
        .find(|task| task.id() == id && !task.id().is_sentinel())
        .ok_or_else(|| ContractError::reverted("unknown task id"))
}

impl InMemoryTaskContract {
    /// Creates an empty in-memory contract.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a confirmed task directly into the ledger.
    ///
    /// Used to model service state that predates the session.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn seed_task(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> ContractResult<TaskId> {
        let mut ledger = write_locked(&self.state)?;
        let id = ledger.assign_id();
        let row = Task::new(id, title, description, false);
        ledger.rows.push(row);
        Ok(id)
    }

    /// Makes the next `get_all_tasks` call fail with the given error.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail_next_fetch(&self, failure: ContractError) -> ContractResult<()> {
        let mut ledger = write_locked(&self.state)?;
        ledger.fetch_failure = Some(failure);
        Ok(())
    }

    /// Makes the next state-changing submission fail with the given error.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail_next_submission(&self, failure: ContractError) -> ContractResult<()> {
        let mut ledger = write_locked(&self.state)?;
        ledger.submit_failure = Some(failure);
        Ok(())
    }

    /// Makes the next confirmation wait fail with the given error.
    ///
    /// The submission itself succeeds; the mutation is never applied.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail_next_confirmation(&self, failure: ContractError) -> ContractResult<()> {
        let mut ledger = write_locked(&self.state)?;
        ledger.confirm_failure = Some(failure);
        Ok(())
    }

    /// Returns the raw ledger rows, vacated slots included.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn rows(&self) -> ContractResult<Vec<Task>> {
        let ledger = self
            .state
            .read()
            .map_err(|err| ContractError::transport(std::io::Error::other(err.to_string())))?;
        Ok(ledger.rows.clone())
    }

    fn begin_submission(&self) -> ContractResult<String> {
        let mut ledger = write_locked(&self.state)?;
        if let Some(failure) = ledger.submit_failure.take() {
            return Err(failure);
        }
        Ok(ledger.assign_reference())
    }
}

#[async_trait]
impl TaskContract for InMemoryTaskContract {
    async fn get_all_tasks(&self) -> ContractResult<Vec<Task>> {
        let mut ledger = write_locked(&self.state)?;
        if let Some(failure) = ledger.fetch_failure.take() {
            return Err(failure);
        }
        Ok(ledger.rows.clone())
    }

    async fn add_task(&self, title: &str, description: &str) -> ContractResult<PendingCall> {
        let reference = self.begin_submission()?;
        let state = Arc::clone(&self.state);
        let title_text = title.to_owned();
        let description_text = description.to_owned();
        Ok(PendingCall::new(CallKind::AddTask, async move {
            take_confirm_failure(&state)?;
            let mut ledger = write_locked(&state)?;
            let id = ledger.assign_id();
            let row = Task::new(id, title_text, description_text, false);
            ledger.rows.push(row);
            Ok(CallReceipt::new(CallKind::AddTask, reference))
        }))
    }

    async fn mark_task_completed(&self, id: TaskId) -> ContractResult<PendingCall> {
        let reference = self.begin_submission()?;
        let state = Arc::clone(&self.state);
        Ok(PendingCall::new(CallKind::MarkTaskCompleted, async move {
            take_confirm_failure(&state)?;
            let mut ledger = write_locked(&state)?;
            let row = find_row(&mut ledger, id)?;
            let completed =
                Task::new(id, row.title().to_owned(), row.description().to_owned(), true);
            *row = completed;
            Ok(CallReceipt::new(CallKind::MarkTaskCompleted, reference))
        }))
    }

    async fn edit_task(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> ContractResult<PendingCall> {
        let reference = self.begin_submission()?;
        let state = Arc::clone(&self.state);
        let title_text = title.to_owned();
        let description_text = description.to_owned();
        Ok(PendingCall::new(CallKind::EditTask, async move {
            take_confirm_failure(&state)?;
            let mut ledger = write_locked(&state)?;
            let row = find_row(&mut ledger, id)?;
            let revised = Task::new(id, title_text, description_text, row.completed());
            *row = revised;
            Ok(CallReceipt::new(CallKind::EditTask, reference))
        }))
    }

    async fn delete_task(&self, id: TaskId) -> ContractResult<PendingCall> {
        let reference = self.begin_submission()?;
        let state = Arc::clone(&self.state);
        Ok(PendingCall::new(CallKind::DeleteTask, async move {
            take_confirm_failure(&state)?;
            let mut ledger = write_locked(&state)?;
            let row = find_row(&mut ledger, id)?;
            *row = Task::new(TaskId::SENTINEL, "", "", false);
            Ok(CallReceipt::new(CallKind::DeleteTask, reference))
        }))
    }
}
