//! When steps for plan structuring BDD scenarios.

use super::world::{StructuringWorld, run_async};
use rstest_bdd_macros::when;

#[when("the treatment plan is structured")]
fn structure_plan(world: &mut StructuringWorld) -> Result<(), eyre::Report> {
    let record_id = world.record_id()?;
    world.last_result = Some(run_async(world.service.structure_plan(record_id)));
    Ok(())
}
