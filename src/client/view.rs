//! Observable view state consumed by the presentation layer.

use crate::session::domain::{Account, ConnectionStatus};
use crate::tasks::domain::Task;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};

/// Observable snapshot of the client.
///
/// Derived state only: `tasks` is always the last successful full fetch,
/// replaced wholesale on every synchronization and never patched. The
/// draft fields back the task composer and are cleared when the add intent
/// they originated confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    status: ConnectionStatus,
    tasks: Vec<Task>,
    last_synced_at: Option<DateTime<Utc>>,
    draft_title: String,
    draft_description: String,
}

impl ViewState {
    /// Returns the connection status.
    #[must_use]
    pub const fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// Returns the connected account, if any.
    #[must_use]
    pub const fn account(&self) -> Option<&Account> {
        self.status.account()
    }

    /// Returns the current task snapshot.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns when the snapshot was last successfully synchronized.
    #[must_use]
    pub const fn last_synced_at(&self) -> Option<DateTime<Utc>> {
        self.last_synced_at
    }

    /// Returns the composer draft title.
    #[must_use]
    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    /// Returns the composer draft description.
    #[must_use]
    pub fn draft_description(&self) -> &str {
        &self.draft_description
    }
}

/// Shared container for the view state.
///
/// Mutation is reserved to the client facade; presentation takes
/// [`ViewHandle::snapshot`] clones.
#[derive(Debug, Clone, Default)]
pub struct ViewHandle {
    inner: Arc<RwLock<ViewState>>,
}

impl ViewHandle {
    /// Creates a handle over an empty, disconnected view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the current view state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Marks the view connected to the given account.
    ///
    /// The task snapshot is left alone; the refresh that follows
    /// establishment publishes it separately.
    pub(crate) fn set_connected(&self, account: Account) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        view.status = ConnectionStatus::Connected { account };
    }

    /// Marks the view disconnected, clearing account and tasks
    /// unconditionally.
    pub(crate) fn set_disconnected(&self) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        view.status = ConnectionStatus::Disconnected;
        view.tasks = Vec::new();
        view.last_synced_at = None;
    }

    /// Replaces the task snapshot wholesale.
    pub(crate) fn publish_tasks(&self, tasks: Vec<Task>, synced_at: DateTime<Utc>) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        view.tasks = tasks;
        view.last_synced_at = Some(synced_at);
    }

    /// Stores the composer draft fields.
    pub(crate) fn set_draft(&self, title: impl Into<String>, description: impl Into<String>) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        view.draft_title = title.into();
        view.draft_description = description.into();
    }

    /// Clears the composer draft fields.
    pub(crate) fn clear_draft(&self) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        view.draft_title = String::new();
        view.draft_description = String::new();
    }

    /// Returns the composer draft fields.
    pub(crate) fn draft(&self) -> (String, String) {
        let view = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        (view.draft_title.clone(), view.draft_description.clone())
    }

    /// Resets the whole view to its initial state.
    pub(crate) fn reset(&self) {
        let mut view = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *view = ViewState::default();
    }
}
