//! Then steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::then;
use taskledger::client::ClientError;
use taskledger::tasks::domain::{Task, TaskId};

fn find_task(world: &BoardWorld, id: u64) -> Result<Task, eyre::Report> {
    world
        .client
        .view()
        .tasks()
        .iter()
        .find(|task| task.id() == TaskId::new(id))
        .cloned()
        .ok_or_else(|| eyre::eyre!("task {id} is not on the board"))
}

#[then("the board shows {count:usize} task")]
fn board_shows_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let shown = world.client.view().tasks().len();
    if shown != count {
        return Err(eyre::eyre!("expected {count} tasks on the board, found {shown}"));
    }
    Ok(())
}

#[then(r#"task {id:u64} is titled "{title}""#)]
fn task_is_titled(world: &BoardWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let task = find_task(world, id)?;
    if task.title() != title {
        return Err(eyre::eyre!(
            "expected task {id} to be titled '{title}', found '{}'",
            task.title()
        ));
    }
    Ok(())
}

#[then("task {id:u64} is completed")]
fn task_is_completed(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task = find_task(world, id)?;
    if !task.completed() {
        return Err(eyre::eyre!("expected task {id} to be completed"));
    }
    Ok(())
}

#[then("task {id:u64} is not completed")]
fn task_is_not_completed(world: &BoardWorld, id: u64) -> Result<(), eyre::Report> {
    let task = find_task(world, id)?;
    if task.completed() {
        return Err(eyre::eyre!("expected task {id} to be pending"));
    }
    Ok(())
}

#[then("the connection fails as rejected by the user")]
fn connection_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ClientError::UserRejected) => Ok(()),
        other => Err(eyre::eyre!("expected a user rejection, found {other:?}")),
    }
}

#[then("the board is disconnected")]
fn board_disconnected(world: &BoardWorld) -> Result<(), eyre::Report> {
    if world.client.view().status().is_connected() {
        return Err(eyre::eyre!("expected the board to be disconnected"));
    }
    Ok(())
}

#[then("the edit is refused before any call")]
fn edit_refused(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ClientError::InvalidIntent(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a validation refusal, found {other:?}")),
    }
}

#[then("the refresh fails with a transport error")]
fn refresh_failed_in_transport(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(ClientError::Transport(_)) => Ok(()),
        other => Err(eyre::eyre!("expected a transport failure, found {other:?}")),
    }
}
