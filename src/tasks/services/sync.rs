//! Service producing the authoritative task snapshot.

use crate::tasks::{
    domain::Task,
    ports::{ContractError, TaskContract},
};
use thiserror::Error;

/// Service-level errors for snapshot refreshes.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// The full-fetch call against the service failed.
    #[error("task list fetch failed: {0}")]
    Fetch(#[source] ContractError),
}

/// Result type for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Produces the authoritative task snapshot from a contract binding.
///
/// The snapshot replaces the read-model wholesale; on failure the caller
/// must keep its previous task set, so a transient fetch error never wipes
/// valid data.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskSynchronizer;

impl TaskSynchronizer {
    /// Creates a new synchronizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fetches the full task set, dropping vacated-slot rows.
    ///
    /// Service-provided ordering is preserved for the surviving rows.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Fetch`] when the read call fails; the caller's
    /// previous snapshot stays valid.
    pub async fn refresh(&self, contract: &dyn TaskContract) -> SyncResult<Vec<Task>> {
        let rows = contract.get_all_tasks().await.map_err(SyncError::Fetch)?;
        let tasks: Vec<Task> = rows
            .into_iter()
            .filter(|task| !task.id().is_sentinel())
            .collect();
        tracing::debug!(count = tasks.len(), "task snapshot refreshed");
        Ok(tasks)
    }
}
