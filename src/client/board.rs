//! Task board client: the presentation boundary of the crate.

use crate::client::{
    error::ClientError,
    view::{ViewHandle, ViewState},
};
use crate::session::{
    domain::{Session, SessionSlot},
    ports::{ProviderEvent, WalletProvider},
    services::{ConnectionManager, SessionTransition},
};
use crate::tasks::{
    domain::TaskId,
    services::{IntentExecutor, TaskSynchronizer},
};
use mockable::Clock;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Result type for task board client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Facade wiring session lifecycle, intent execution, and the view.
///
/// Presentation reads [`ViewState`] snapshots and calls the action entry
/// points; everything else stays internal. The client owns the provider
/// event pump: it is spawned by [`TaskBoardClient::initialize`] and torn
/// down by [`TaskBoardClient::shutdown`] or drop.
pub struct TaskBoardClient<P, C>
where
    P: WalletProvider + 'static,
    C: Clock + Send + Sync + 'static,
{
    connection: Arc<ConnectionManager<P>>,
    executor: IntentExecutor,
    synchronizer: TaskSynchronizer,
    view: ViewHandle,
    clock: Arc<C>,
    pump: StdMutex<Option<JoinHandle<()>>>,
}

impl<P, C> TaskBoardClient<P, C>
where
    P: WalletProvider + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a client over the given provider.
    #[must_use]
    pub fn new(provider: Arc<P>, clock: Arc<C>) -> Self {
        let slot = SessionSlot::new();
        let synchronizer = TaskSynchronizer::new();
        Self {
            connection: Arc::new(ConnectionManager::new(provider, slot.clone())),
            executor: IntentExecutor::new(slot, synchronizer),
            synchronizer,
            view: ViewHandle::new(),
            clock,
            pump: StdMutex::new(None),
        }
    }

    /// Starts the client: spawns the provider event pump and restores a
    /// session silently when the wallet has already authorized one.
    ///
    /// Safe to call repeatedly (a remount replaces the previous pump).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the silent restore or the initial
    /// fetch fails; the pump keeps running either way.
    pub async fn initialize(&self) -> ClientResult<ViewState> {
        self.start_pump();
        self.restore_into_view().await?;
        Ok(self.view.snapshot())
    }

    /// Stops the provider event pump.
    ///
    /// The session and view are left as they are; [`Self::initialize`]
    /// brings the pump back.
    pub fn shutdown(&self) {
        let mut pump = self.pump.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pump.take() {
            handle.abort();
        }
    }

    /// Connects through the provider's authorization prompt and performs
    /// the initial fetch.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UserRejected`] when the user declines,
    /// [`ClientError::NoAccountsGranted`] when the prompt grants nothing,
    /// or the underlying provider or fetch failure.
    pub async fn connect(&self) -> ClientResult<ViewState> {
        let session = self.connection.connect().await?;
        self.view.set_connected(session.account().clone());
        self.refresh_into_view(&session).await?;
        Ok(self.view.snapshot())
    }

    /// Disconnects locally, clearing account and tasks unconditionally.
    ///
    /// In-flight intents are not aborted; they fail naturally against the
    /// cleared slot. Provider-level authorization is untouched.
    #[must_use]
    pub fn disconnect(&self) -> ViewState {
        self.connection.disconnect();
        self.view.set_disconnected();
        self.view.snapshot()
    }

    /// Re-fetches the task snapshot through the active session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoActiveSession`] when disconnected, or the
    /// fetch failure; the previous snapshot is kept on failure.
    pub async fn refresh(&self) -> ClientResult<ViewState> {
        let session = self
            .connection
            .current()
            .ok_or(ClientError::NoActiveSession)?;
        self.refresh_into_view(&session).await?;
        Ok(self.view.snapshot())
    }

    /// Rebuilds the whole client state from scratch.
    ///
    /// Equivalent to a fresh start: the view is reset, the session is
    /// cleared, and the silent restore path runs again. The event pump
    /// uses this after a network change.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the restore or initial fetch fails.
    pub async fn reload(&self) -> ClientResult<ViewState> {
        self.view.reset();
        self.connection.disconnect();
        self.restore_into_view().await?;
        Ok(self.view.snapshot())
    }

    /// Creates a task, waits for confirmation, and publishes the refreshed
    /// snapshot. Clears the composer draft on success.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] with the most specific reason when the
    /// intent fails; the view is left untouched.
    pub async fn add_task(&self, title: &str, description: &str) -> ClientResult<ViewState> {
        let tasks = self.executor.add_task(title, description).await?;
        self.view.publish_tasks(tasks, self.clock.utc());
        self.view.clear_draft();
        Ok(self.view.snapshot())
    }

    /// Marks a task completed, waits for confirmation, and publishes the
    /// refreshed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] with the most specific reason when the
    /// intent fails; the view is left untouched.
    pub async fn mark_completed(&self, id: TaskId) -> ClientResult<ViewState> {
        let tasks = self.executor.mark_completed(id).await?;
        self.view.publish_tasks(tasks, self.clock.utc());
        Ok(self.view.snapshot())
    }

    /// Replaces a task's title and description, waits for confirmation,
    /// and publishes the refreshed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidIntent`] when either field is empty
    /// (no call is issued), otherwise as the other intents.
    pub async fn edit_task(
        &self,
        id: TaskId,
        title: &str,
        description: &str,
    ) -> ClientResult<ViewState> {
        let tasks = self.executor.edit_task(id, title, description).await?;
        self.view.publish_tasks(tasks, self.clock.utc());
        Ok(self.view.snapshot())
    }

    /// Deletes a task, waits for confirmation, and publishes the refreshed
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] with the most specific reason when the
    /// intent fails; the view is left untouched.
    pub async fn delete_task(&self, id: TaskId) -> ClientResult<ViewState> {
        let tasks = self.executor.delete_task(id).await?;
        self.view.publish_tasks(tasks, self.clock.utc());
        Ok(self.view.snapshot())
    }

    /// Stores the composer draft fields presentation binds to.
    pub fn update_draft(&self, title: impl Into<String>, description: impl Into<String>) {
        self.view.set_draft(title, description);
    }

    /// Submits the composer draft as a new task.
    ///
    /// # Errors
    ///
    /// As [`Self::add_task`].
    pub async fn submit_draft(&self) -> ClientResult<ViewState> {
        let (title, description) = self.view.draft();
        self.add_task(&title, &description).await
    }

    /// Returns the current view snapshot.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view.snapshot()
    }

    /// Returns a shared handle presentation can poll for snapshots.
    #[must_use]
    pub fn view_handle(&self) -> ViewHandle {
        self.view.clone()
    }

    /// Restores a session silently and publishes its first snapshot.
    async fn restore_into_view(&self) -> ClientResult<()> {
        if let Some(session) = self.connection.restore().await? {
            self.view.set_connected(session.account().clone());
            self.refresh_into_view(&session).await?;
        }
        Ok(())
    }

    async fn refresh_into_view(&self, session: &Session) -> ClientResult<()> {
        let tasks = self
            .synchronizer
            .refresh(session.contract().as_ref())
            .await?;
        self.view.publish_tasks(tasks, self.clock.utc());
        Ok(())
    }

    /// Spawns the provider event pump, replacing any previous one.
    fn start_pump(&self) {
        let connection = Arc::clone(&self.connection);
        let view = self.view.clone();
        let synchronizer = self.synchronizer;
        let clock = Arc::clone(&self.clock);
        let mut events = self.connection.events();
        let handle = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        drive_transition(&connection, &view, synchronizer, &*clock, event).await;
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "provider events lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });

        let mut pump = self.pump.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pump.replace(handle) {
            previous.abort();
        }
    }
}

impl<P, C> Drop for TaskBoardClient<P, C>
where
    P: WalletProvider + 'static,
    C: Clock + Send + Sync + 'static,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Applies one provider event to the session and view.
async fn drive_transition<P, C>(
    connection: &ConnectionManager<P>,
    view: &ViewHandle,
    synchronizer: TaskSynchronizer,
    clock: &C,
    event: ProviderEvent,
) where
    P: WalletProvider,
    C: Clock + Send + Sync,
{
    match connection.apply_event(event).await {
        Ok(SessionTransition::Established(session)) => {
            publish_established(view, synchronizer, clock, &session).await;
        }
        Ok(SessionTransition::Cleared) => view.set_disconnected(),
        Ok(SessionTransition::Invalidated(chain_id)) => {
            tracing::info!(%chain_id, "rebuilding client state for new network");
            view.reset();
            match connection.restore().await {
                Ok(Some(session)) => {
                    publish_established(view, synchronizer, clock, &session).await;
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "silent restore after network change failed");
                }
            }
        }
        Err(err) => tracing::warn!(error = %err, "provider event handling failed"),
    }
}

/// Publishes an established session and its first snapshot to the view.
async fn publish_established<C>(
    view: &ViewHandle,
    synchronizer: TaskSynchronizer,
    clock: &C,
    session: &Session,
) where
    C: Clock + Send + Sync,
{
    view.set_connected(session.account().clone());
    match synchronizer.refresh(session.contract().as_ref()).await {
        Ok(tasks) => view.publish_tasks(tasks, clock.utc()),
        Err(err) => {
            tracing::warn!(error = %err, "task refresh failed; keeping previous snapshot");
        }
    }
}
