//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskledger::tasks::{domain::TaskId, ports::ContractError};

#[when(r#"the user adds a task titled "{title}" described "{description}""#)]
fn add_task(world: &mut BoardWorld, title: String, description: String) -> Result<(), eyre::Report> {
    run_async(world.client.add_task(&title, &description)).wrap_err("add a task")?;
    Ok(())
}

#[when("the user marks task {id:u64} completed")]
fn mark_task_completed(world: &mut BoardWorld, id: u64) -> Result<(), eyre::Report> {
    run_async(world.client.mark_completed(TaskId::new(id))).wrap_err("mark the task completed")?;
    Ok(())
}

#[when(r#"the user edits task {id:u64} with title "{title}" and description {description:string}"#)]
fn edit_task(world: &mut BoardWorld, id: u64, title: String, description: String) {
    let result = run_async(world.client.edit_task(TaskId::new(id), &title, &description));
    world.last_error = result.err();
}

#[when("the user attempts to connect")]
fn attempt_to_connect(world: &mut BoardWorld) {
    let result = run_async(world.client.connect());
    world.last_error = result.err();
}

#[when("the next ledger fetch fails")]
fn next_fetch_fails(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .contract
        .fail_next_fetch(ContractError::transport(std::io::Error::other(
            "rpc unreachable",
        )))
        .wrap_err("script the fetch failure")?;
    Ok(())
}

#[when("the user refreshes the board")]
fn refresh_board(world: &mut BoardWorld) {
    let result = run_async(world.client.refresh());
    world.last_error = result.err();
}
