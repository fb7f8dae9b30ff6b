//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskledger::session::domain::Account;

#[given(r#"a wallet granting account "{address}" on request"#)]
fn wallet_grants_account(world: &mut BoardWorld, address: String) -> Result<(), eyre::Report> {
    let account = Account::new(address).wrap_err("scenario account address should be valid")?;
    world
        .provider
        .grant_on_request(vec![account])
        .wrap_err("script the wallet grant")?;
    Ok(())
}

#[given("a connected task board client")]
fn connected_client(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    run_async(world.client.connect()).wrap_err("connect the task board client")?;
    Ok(())
}

#[given("a wallet that declines the next authorization prompt")]
fn wallet_declines_prompt(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .provider
        .reject_next_request()
        .wrap_err("script the wallet rejection")?;
    Ok(())
}
