//! Domain model for the task read-model.
//!
//! The task domain mirrors the external service's task rows and validates
//! edit payloads while keeping all transport concerns outside of the domain
//! boundary.

mod error;
mod revision;
mod task;

pub use error::TaskDomainError;
pub use revision::TaskRevision;
pub use task::{Task, TaskId};
