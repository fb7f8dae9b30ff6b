//! Presentation boundary for the task board.
//!
//! The client module exposes everything the excluded UI layer consumes:
//! the [`TaskBoardClient`] facade with its action entry points, the
//! [`ViewState`] read-model snapshot, and the user-visible [`ClientError`]
//! taxonomy. All state transitions funnel through the facade; presentation
//! never talks to the session or task contexts directly.

mod board;
mod error;
mod view;

pub use board::{ClientResult, TaskBoardClient};
pub use error::ClientError;
pub use view::{ViewHandle, ViewState};

#[cfg(test)]
mod tests;
