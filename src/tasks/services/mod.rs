//! Application services for the task read-model.

mod intents;
mod sync;

pub use intents::{IntentError, IntentExecutor, IntentResult};
pub use sync::{SyncError, SyncResult, TaskSynchronizer};
