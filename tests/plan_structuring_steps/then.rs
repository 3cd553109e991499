//! Then steps for plan structuring BDD scenarios.

use super::world::{CANONICAL_BOARD, StructuringWorld, run_async};
use careboard::{
    kanban::domain::ColumnId, record::ports::RecordRepository,
    treatment::domain::TreatmentPlanError,
};
use rstest_bdd_macros::then;

#[then(r#"the todo column holds exactly the task "{content}""#)]
fn todo_holds_task(world: &StructuringWorld, content: String) -> Result<(), eyre::Report> {
    let board = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing structuring result in scenario world"))?
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected structuring failure: {err}"))?;

    let todo: Vec<&str> = board
        .tasks_by_column(ColumnId::Todo)
        .map(|task| task.content())
        .collect();
    if todo != [content.as_str()] {
        return Err(eyre::eyre!("expected only '{content}' in todo, found {todo:?}"));
    }
    Ok(())
}

#[then("the stored board equals the canonical board text")]
fn stored_board_is_canonical(world: &StructuringWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.repository.find_by_id(world.record_id()?))?
        .ok_or_else(|| eyre::eyre!("record vanished"))?;
    if stored.kanban_records() != CANONICAL_BOARD {
        return Err(eyre::eyre!(
            "stored board differs from the canonical text: {}",
            stored.kanban_records()
        ));
    }
    Ok(())
}

#[then("structuring fails with a plan format error")]
fn fails_with_format_error(world: &StructuringWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing structuring result in scenario world"))?;
    if !matches!(result, Err(TreatmentPlanError::PlanFormat(_))) {
        return Err(eyre::eyre!("expected a plan format error, got {result:?}"));
    }
    Ok(())
}

#[then("structuring fails with a plan validation error")]
fn fails_with_validation_error(world: &StructuringWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing structuring result in scenario world"))?;
    if !matches!(result, Err(TreatmentPlanError::PlanValidation(_))) {
        return Err(eyre::eyre!("expected a plan validation error, got {result:?}"));
    }
    Ok(())
}

#[then("the record is left unchanged")]
fn record_unchanged(world: &StructuringWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.repository.find_by_id(world.record_id()?))?;
    if stored.as_ref() != world.stored_before.as_ref() {
        return Err(eyre::eyre!("record was modified by a failed structuring"));
    }
    Ok(())
}
