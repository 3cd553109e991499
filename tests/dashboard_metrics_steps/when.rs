//! When steps for dashboard metrics BDD scenarios.

use super::world::{MetricsWorld, OWNER, run_async};
use careboard::record::domain::OwnerEmail;
use rstest_bdd_macros::when;

#[when("the dashboard metrics are computed")]
fn compute_metrics(world: &mut MetricsWorld) -> Result<(), eyre::Report> {
    let owner = OwnerEmail::new(OWNER)?;
    world.last_result = Some(run_async(world.service.dashboard_for(&owner)));
    Ok(())
}
