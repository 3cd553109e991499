//! Record persistence against a real `PostgreSQL` schema.

use super::helpers::{BoxError, PreparedRepo, owner, prepared_repo, record_created_at};
use careboard::record::{
    domain::{MAX_EMAIL_CHARS, MAX_RECORD_NAME_CHARS, RecordId, RecordUpdate},
    ports::{RecordRepository, RecordRepositoryError},
};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::DefaultClock;
use rstest::rstest;

const PLAN: &str = "Book an MRI within 2 weeks.";
const BOARD: &str = r#"{"columns":[],"tasks":[]}"#;

fn base_time() -> Result<DateTime<Utc>, BoxError> {
    DateTime::from_timestamp(1_700_000_000, 0).ok_or_else(|| "timestamp out of range".into())
}

#[rstest]
fn stored_record_round_trips(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let record = record_created_at(&owner("ada@example.com")?, "Blood work", base_time()?);

    ctx.rt.block_on(ctx.repo.store(&record))?;
    let found = ctx.rt.block_on(ctx.repo.find_by_id(record.id()))?;

    assert_eq!(found, Some(record));
    assert_eq!(ctx.rt.block_on(ctx.repo.find_by_id(RecordId::new()))?, None);
    Ok(())
}

#[rstest]
fn board_only_update_leaves_analysis_untouched(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let record = record_created_at(&owner("ada@example.com")?, "Blood work", base_time()?);
    ctx.rt.block_on(ctx.repo.store(&record))?;
    ctx.rt.block_on(
        ctx.repo
            .update(&RecordUpdate::new(record.id(), &DefaultClock).with_analysis_result(PLAN)),
    )?;

    let updated = ctx.rt.block_on(
        ctx.repo
            .update(&RecordUpdate::new(record.id(), &DefaultClock).with_kanban_records(BOARD)),
    )?;

    assert_eq!(updated.analysis_result(), PLAN);
    assert_eq!(updated.kanban_records(), BOARD);
    assert_eq!(updated.record_name(), "Blood work");
    assert!(updated.updated_at() > record.updated_at());
    let reloaded = ctx.rt.block_on(ctx.repo.find_by_id(record.id()))?;
    assert_eq!(reloaded, Some(updated));
    Ok(())
}

#[rstest]
fn clearing_update_writes_an_empty_board(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let record = record_created_at(&owner("ada@example.com")?, "Blood work", base_time()?);
    ctx.rt.block_on(ctx.repo.store(&record))?;
    ctx.rt.block_on(
        ctx.repo.update(
            &RecordUpdate::new(record.id(), &DefaultClock)
                .with_analysis_result(PLAN)
                .with_kanban_records(BOARD),
        ),
    )?;

    let cleared = ctx.rt.block_on(ctx.repo.update(
        &RecordUpdate::new(record.id(), &DefaultClock)
            .with_analysis_result("Revised plan.")
            .clearing_kanban_records(),
    ))?;

    assert_eq!(cleared.kanban_records(), "");
    assert!(!cleared.has_board());
    assert_eq!(cleared.analysis_result(), "Revised plan.");
    Ok(())
}

#[rstest]
fn updating_a_missing_record_is_not_found(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let missing = RecordId::new();

    let result = ctx.rt.block_on(
        ctx.repo
            .update(&RecordUpdate::new(missing, &DefaultClock).with_analysis_result(PLAN)),
    );

    assert!(matches!(result, Err(RecordRepositoryError::NotFound(id)) if id == missing));
    Ok(())
}

#[rstest]
fn storing_the_same_id_twice_is_a_duplicate(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let record = record_created_at(&owner("ada@example.com")?, "Blood work", base_time()?);
    ctx.rt.block_on(ctx.repo.store(&record))?;

    let result = ctx.rt.block_on(ctx.repo.store(&record));

    assert!(
        matches!(result, Err(RecordRepositoryError::DuplicateRecord(id)) if id == record.id()),
        "expected a duplicate record error, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn owner_records_come_back_oldest_first(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let ada = owner("ada@example.com")?;
    let start = base_time()?;
    let newest = record_created_at(&ada, "Follow-up", start + TimeDelta::days(2));
    let oldest = record_created_at(&ada, "Intake", start);
    let middle = record_created_at(&ada, "Scan", start + TimeDelta::days(1));
    let same_time = record_created_at(&ada, "Second scan", start + TimeDelta::days(1));
    let other = record_created_at(&owner("bob@example.com")?, "Elsewhere", start);
    for record in [&newest, &middle, &other, &same_time, &oldest] {
        ctx.rt.block_on(ctx.repo.store(record))?;
    }

    let names: Vec<String> = ctx
        .rt
        .block_on(ctx.repo.find_by_owner(&ada))?
        .iter()
        .map(|record| record.record_name().to_owned())
        .collect();

    let (first_tied, second_tied) = if middle.id().into_inner() < same_time.id().into_inner() {
        ("Scan", "Second scan")
    } else {
        ("Second scan", "Scan")
    };
    assert_eq!(names, ["Intake", first_tied, second_tied, "Follow-up"]);
    Ok(())
}

#[rstest]
fn longest_valid_names_fit_the_columns(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let email = format!("{}@{}.com", "a".repeat(64), "d".repeat(MAX_EMAIL_CHARS - 69));
    let name = "\u{e9}".repeat(MAX_RECORD_NAME_CHARS);
    let record = record_created_at(&owner(&email)?, &name, base_time()?);

    ctx.rt.block_on(ctx.repo.store(&record))?;

    assert_eq!(ctx.rt.block_on(ctx.repo.find_by_id(record.id()))?, Some(record));
    Ok(())
}
