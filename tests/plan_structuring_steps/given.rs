//! Given steps for plan structuring BDD scenarios.

use super::world::{CANONICAL_BOARD, StructuringWorld, run_async};
use careboard::record::{
    domain::{OwnerEmail, Record, RecordUpdate},
    ports::RecordRepository,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a record with the treatment plan "{plan}""#)]
fn record_with_plan(world: &mut StructuringWorld, plan: String) -> Result<(), eyre::Report> {
    let clock = DefaultClock;
    let mut record = Record::new(OwnerEmail::new("patient@example.com")?, "Blood work", &clock)?;
    record.apply(&RecordUpdate::new(record.id(), &clock).with_analysis_result(plan));
    run_async(world.repository.store(&record)).wrap_err("store scenario record")?;

    world.record_id = Some(record.id());
    world.stored_before = Some(record);
    Ok(())
}

#[given("the model answers with the canonical one-task board")]
fn model_answers_canonical(world: &mut StructuringWorld) {
    world.model.push(Ok(CANONICAL_BOARD.to_owned()));
}

#[given("the model answers with the canonical board inside a code fence")]
fn model_answers_fenced(world: &mut StructuringWorld) {
    world
        .model
        .push(Ok(format!("```json\n{CANONICAL_BOARD}\n```")));
}

#[given(r#"the model answers "{reply}""#)]
fn model_answers_text(world: &mut StructuringWorld, reply: String) {
    world.model.push(Ok(reply));
}

#[given(r#"the model answers with a board that places a task in "{column}""#)]
fn model_answers_unknown_column(world: &mut StructuringWorld, column: String) {
    world.model.push(Ok(format!(
        concat!(
            r#"{{"columns":[{{"id":"todo","title":"Todo"}},{{"id":"doing","title":"Doing"}},"#,
            r#"{{"id":"done","title":"Done"}}],"#,
            r#""tasks":[{{"id":"1","columnId":"{}","content":"Scan"}}]}}"#
        ),
        column
    )));
}
