//! User profile persistence against a real `PostgreSQL` schema.

use super::helpers::{BoxError, PreparedRepo, owner, prepared_repo};
use careboard::record::{
    domain::{MAX_USERNAME_CHARS, UserProfile},
    ports::{RecordRepositoryError, UserDirectory},
};
use rstest::rstest;

#[rstest]
fn profiles_round_trip_with_optional_fields(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let full = UserProfile::new(owner("ada@example.com")?, "Ada")?
        .with_age(36)
        .with_location("London");
    let bare = UserProfile::new(owner("bob@example.com")?, "Bob")?;
    ctx.rt.block_on(ctx.repo.store_user(&full))?;
    ctx.rt.block_on(ctx.repo.store_user(&bare))?;

    let found_full = ctx
        .rt
        .block_on(ctx.repo.find_user_by_email(&owner("ADA@example.com")?))?;
    let found_bare = ctx
        .rt
        .block_on(ctx.repo.find_user_by_email(&owner("bob@example.com")?))?;

    assert_eq!(found_full, Some(full));
    assert_eq!(found_bare, Some(bare));
    assert_eq!(
        ctx.rt
            .block_on(ctx.repo.find_user_by_email(&owner("eve@example.com")?))?,
        None
    );
    Ok(())
}

#[rstest]
fn registering_an_email_twice_is_a_duplicate(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let email = owner("ada@example.com")?;
    ctx.rt
        .block_on(ctx.repo.store_user(&UserProfile::new(email.clone(), "Ada")?))?;

    let result = ctx
        .rt
        .block_on(ctx.repo.store_user(&UserProfile::new(email.clone(), "Ada again")?));

    assert!(
        matches!(&result, Err(RecordRepositoryError::DuplicateUser(dup)) if *dup == email),
        "expected a duplicate user error, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn long_usernames_and_locations_are_stored_whole(
    prepared_repo: Result<Option<PreparedRepo>, BoxError>,
) -> Result<(), BoxError> {
    let Some(ctx) = prepared_repo? else {
        return Ok(());
    };
    let email = owner("ada@example.com")?;
    let profile = UserProfile::new(email.clone(), "u".repeat(MAX_USERNAME_CHARS))?
        .with_location("Ward 7, ".repeat(60));

    ctx.rt.block_on(ctx.repo.store_user(&profile))?;

    assert_eq!(
        ctx.rt.block_on(ctx.repo.find_user_by_email(&email))?,
        Some(profile)
    );
    Ok(())
}
