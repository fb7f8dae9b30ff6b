//! Contract binding port for the ledger-backed task service.

use crate::tasks::domain::{Task, TaskId};
use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// Result type for contract call operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// State-changing call kinds exposed by the task service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Create a new task; the service assigns its identifier.
    AddTask,
    /// Set the one-way completion flag on a task.
    MarkTaskCompleted,
    /// Replace the title and description of a task.
    EditTask,
    /// Remove a task, vacating its ledger slot.
    DeleteTask,
}

impl CallKind {
    /// Returns the call name as exposed by the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddTask => "addTask",
            Self::MarkTaskCompleted => "markTaskCompleted",
            Self::EditTask => "editTask",
            Self::DeleteTask => "deleteTask",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confirmation proof for a durably accepted state-changing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallReceipt {
    kind: CallKind,
    reference: String,
}

impl CallReceipt {
    /// Builds a receipt from the confirmed call kind and its service-side
    /// reference (for ledger backends, the transaction hash).
    #[must_use]
    pub fn new(kind: CallKind, reference: impl Into<String>) -> Self {
        Self {
            kind,
            reference: reference.into(),
        }
    }

    /// Returns the confirmed call kind.
    #[must_use]
    pub const fn kind(&self) -> CallKind {
        self.kind
    }

    /// Returns the service-side reference for the confirmed call.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

type ConfirmationFuture = Pin<Box<dyn Future<Output = ContractResult<CallReceipt>> + Send>>;

/// Handle to a submitted-but-unconfirmed state-changing call.
///
/// Submission alone means the call was broadcast, not applied. Callers must
/// await [`PendingCall::confirmed`] before treating the mutation as durable;
/// a submitted call cannot be withdrawn.
pub struct PendingCall {
    kind: CallKind,
    confirmation: ConfirmationFuture,
}

impl PendingCall {
    /// Wraps a submitted call together with its confirmation future.
    #[must_use]
    pub fn new(
        kind: CallKind,
        confirmation: impl Future<Output = ContractResult<CallReceipt>> + Send + 'static,
    ) -> Self {
        Self {
            kind,
            confirmation: Box::pin(confirmation),
        }
    }

    /// Returns the kind of the submitted call.
    #[must_use]
    pub const fn kind(&self) -> CallKind {
        self.kind
    }

    /// Suspends until the service durably accepts the call.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the call is rejected by the user,
    /// reverted by the service, or lost to a transport failure.
    pub async fn confirmed(self) -> ContractResult<CallReceipt> {
        self.confirmation.await
    }
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Typed call surface of the task service, bound to one account and network.
///
/// A binding is produced by the wallet provider at session establishment and
/// is replaced wholesale when the session changes; implementations must not
/// rebind internally.
#[async_trait]
pub trait TaskContract: Send + Sync {
    /// Fetches the full task set, including vacated slots callers must
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Transport`] on network or RPC failure.
    async fn get_all_tasks(&self) -> ContractResult<Vec<Task>>;

    /// Submits creation of a task; the service assigns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the submission is rejected or lost in
    /// transport.
    async fn add_task(&self, title: &str, description: &str) -> ContractResult<PendingCall>;

    /// Submits the one-way completion flag for the task.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the submission is rejected or lost in
    /// transport.
    async fn mark_task_completed(&self, id: TaskId) -> ContractResult<PendingCall>;

    /// Submits replacement title and description for the task.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the submission is rejected or lost in
    /// transport.
    async fn edit_task(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> ContractResult<PendingCall>;

    /// Submits removal of the task, vacating its ledger slot.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError`] when the submission is rejected or lost in
    /// transport.
    async fn delete_task(&self, id: TaskId) -> ContractResult<PendingCall>;
}

/// Errors surfaced by contract binding implementations.
#[derive(Debug, Clone, Error)]
pub enum ContractError {
    /// The user declined to sign the transaction prompt.
    #[error("transaction rejected by the user")]
    Rejected,

    /// The service refused the state change.
    #[error("execution reverted: {reason}")]
    Reverted {
        /// Revert reason reported by the service.
        reason: String,
    },

    /// Network or RPC failure between client and service.
    #[error("contract transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl ContractError {
    /// Wraps a revert reason reported by the service.
    #[must_use]
    pub fn reverted(reason: impl Into<String>) -> Self {
        Self::Reverted {
            reason: reason.into(),
        }
    }

    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
