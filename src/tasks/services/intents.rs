//! Service serializing user-initiated task mutations end-to-end.

use crate::session::domain::{Session, SessionSlot};
use crate::tasks::{
    domain::{Task, TaskDomainError, TaskId, TaskRevision},
    ports::{ContractError, PendingCall},
    services::{SyncError, TaskSynchronizer},
};
use thiserror::Error;
use tokio::sync::Mutex;

/// Service-level errors for intent execution.
#[derive(Debug, Error)]
pub enum IntentError {
    /// No wallet session is active; the intent was never submitted.
    #[error("no active wallet session")]
    NoActiveSession,

    /// Intent input failed domain validation; no call was issued.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// The contract call was rejected, reverted, or lost in transport.
    #[error(transparent)]
    Call(#[from] ContractError),

    /// The post-confirmation refresh failed.
    #[error(transparent)]
    Refresh(#[from] SyncError),
}

/// Result type for intent execution.
pub type IntentResult<T> = Result<T, IntentError>;

/// Executes one user intent end-to-end: submit, confirm, refresh.
///
/// Intents are serialized per executor: the internal lock is held across
/// the whole submit-confirm-refresh span, so two rapid intents cannot
/// interleave their refreshes. A successful intent resolves to the task
/// snapshot taken through the same binding the intent ran against; a failed
/// one leaves the read-model for the caller to keep untouched. Submitted
/// calls cannot be withdrawn, so nothing here retries or cancels.
#[derive(Debug)]
pub struct IntentExecutor {
    slot: SessionSlot,
    synchronizer: TaskSynchronizer,
    serial: Mutex<()>,
}

impl IntentExecutor {
    /// Creates an executor reading sessions from the given slot.
    #[must_use]
    pub const fn new(slot: SessionSlot, synchronizer: TaskSynchronizer) -> Self {
        Self {
            slot,
            synchronizer,
            serial: Mutex::const_new(()),
        }
    }

    /// Submits a task creation and waits for it to land.
    ///
    /// Title and description are forwarded as provided; the service owns
    /// any content policy for new tasks.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError`] when no session is active or the call fails
    /// at submission, confirmation, or refresh.
    pub async fn add_task(&self, title: &str, description: &str) -> IntentResult<Vec<Task>> {
        let _serial = self.serial.lock().await;
        let session = self.current_session()?;
        let pending = session.contract().add_task(title, description).await?;
        self.settle(&session, pending).await
    }

    /// Submits the one-way completion flag and waits for it to land.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError`] when no session is active or the call fails
    /// at submission, confirmation, or refresh.
    pub async fn mark_completed(&self, id: TaskId) -> IntentResult<Vec<Task>> {
        let _serial = self.serial.lock().await;
        let session = self.current_session()?;
        let pending = session.contract().mark_task_completed(id).await?;
        self.settle(&session, pending).await
    }

    /// Submits replacement title and description and waits for them to
    /// land.
    ///
    /// The pair is validated first; an empty title or description aborts
    /// before any call is issued.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::Validation`] on an empty field, otherwise as
    /// the other intents.
    pub async fn edit_task(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> IntentResult<Vec<Task>> {
        let revision = TaskRevision::new(title, description)?;
        let _serial = self.serial.lock().await;
        let session = self.current_session()?;
        let pending = session
            .contract()
            .edit_task(id, revision.title(), revision.description())
            .await?;
        self.settle(&session, pending).await
    }

    /// Submits removal of the task and waits for it to land.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError`] when no session is active or the call fails
    /// at submission, confirmation, or refresh.
    pub async fn delete_task(&self, id: TaskId) -> IntentResult<Vec<Task>> {
        let _serial = self.serial.lock().await;
        let session = self.current_session()?;
        let pending = session.contract().delete_task(id).await?;
        self.settle(&session, pending).await
    }

    fn current_session(&self) -> IntentResult<Session> {
        self.slot.current().ok_or(IntentError::NoActiveSession)
    }

    /// Awaits confirmation, then refreshes through the intent's own
    /// binding — not the slot, which may have been swapped meanwhile.
    async fn settle(&self, session: &Session, pending: PendingCall) -> IntentResult<Vec<Task>> {
        let receipt = pending.confirmed().await?;
        tracing::info!(
            call = %receipt.kind(),
            reference = receipt.reference(),
            "intent confirmed"
        );
        let tasks = self
            .synchronizer
            .refresh(session.contract().as_ref())
            .await?;
        Ok(tasks)
    }
}
