//! Validated edit payload for task mutations.

use super::TaskDomainError;

/// Replacement title and description for an existing task.
///
/// Edits with an empty title or description must never reach the contract,
/// so the pair is validated at construction. Trimming is applied only for
/// the emptiness check; the stored text keeps its original form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRevision {
    title: String,
    description: String,
}

impl TaskRevision {
    /// Creates a validated revision.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when the respective field is
    /// empty after trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let title_text = title.into();
        let description_text = description.into();
        if title_text.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if description_text.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        Ok(Self {
            title: title_text,
            description: description_text,
        })
    }

    /// Returns the replacement title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the replacement description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}
