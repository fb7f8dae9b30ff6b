//! Task read-model types mirrored from the external task service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-assigned task identifier.
///
/// The external service owns identifier assignment; the client never mints
/// one. The zero value marks a vacated ledger slot rather than a task and is
/// filtered from every published task set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier of a vacated ledger slot, never a real task.
    pub const SENTINEL: Self = Self(0);

    /// Wraps a service-assigned identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether this identifier marks a vacated slot rather than a task.
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit of work tracked by the external task service.
///
/// Tasks are read-model values: every mutation is a round trip through the
/// contract binding, and the service is the sole owner of the canonical set.
/// The `completed` flag transitions one way; no reopen operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    completed: bool,
}

impl Task {
    /// Builds a task row as reported by the external service.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Returns the service-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been completed.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}
