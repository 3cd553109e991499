//! `PostgreSQL` repository implementation for records and user profiles.

use super::{
    models::{NewRecordRow, RecordChangeset, RecordRow, UserProfileRow},
    schema::{records, user_profiles},
};
use crate::record::{
    domain::{OwnerEmail, PersistedRecordData, Record, RecordId, RecordUpdate, UserProfile},
    ports::{RecordRepository, RecordRepositoryError, RecordRepositoryResult, UserDirectory},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by record adapters.
pub type RecordPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed record repository and user directory.
#[derive(Debug, Clone)]
pub struct PostgresRecordRepository {
    pool: RecordPgPool,
}

impl PostgresRecordRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RecordPgPool) -> Self {
        Self { pool }
    }

    /// Builds a pooled repository for the given connection URL.
    ///
    /// # Errors
    ///
    /// Returns [`RecordRepositoryError::Persistence`] when the pool cannot
    /// open its initial connections.
    pub fn connect(database_url: &str) -> RecordRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(RecordRepositoryError::persistence)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> RecordRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecordRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(RecordRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RecordRepositoryError::persistence)?
    }
}

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn store(&self, record: &Record) -> RecordRepositoryResult<()> {
        let record_id = record.id();
        let new_row = to_new_row(record);

        self.run_blocking(move |connection| {
            diesel::insert_into(records::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RecordRepositoryError::DuplicateRecord(record_id)
                    }
                    _ => RecordRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: RecordId) -> RecordRepositoryResult<Option<Record>> {
        self.run_blocking(move |connection| {
            let row = records::table
                .filter(records::id.eq(id.into_inner()))
                .select(RecordRow::as_select())
                .first::<RecordRow>(connection)
                .optional()
                .map_err(RecordRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn find_by_owner(&self, owner: &OwnerEmail) -> RecordRepositoryResult<Vec<Record>> {
        let owner_email = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = records::table
                .filter(records::owner_email.eq(owner_email))
                .order((records::created_at.asc(), records::id.asc()))
                .select(RecordRow::as_select())
                .load::<RecordRow>(connection)
                .map_err(RecordRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn update(&self, update: &RecordUpdate) -> RecordRepositoryResult<Record> {
        let record_id = update.record_id();
        let changeset = RecordChangeset {
            analysis_result: update.analysis_result().map(ToOwned::to_owned),
            kanban_records: update.kanban_records().map(ToOwned::to_owned),
            updated_at: update.updated_at(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::update(records::table.filter(records::id.eq(record_id.into_inner())))
                .set(&changeset)
                .returning(RecordRow::as_returning())
                .get_result::<RecordRow>(connection)
                .optional()
                .map_err(RecordRepositoryError::persistence)?
                .ok_or(RecordRepositoryError::NotFound(record_id))?;
            row_to_record(row)
        })
        .await
    }
}

#[async_trait]
impl UserDirectory for PostgresRecordRepository {
    async fn store_user(&self, profile: &UserProfile) -> RecordRepositoryResult<()> {
        let email = profile.email().clone();
        let row = UserProfileRow {
            email: profile.email().as_str().to_owned(),
            username: profile.username().to_owned(),
            age: profile.age().map(i32::from),
            location: profile.location().map(ToOwned::to_owned),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(user_profiles::table)
                .values(&row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RecordRepositoryError::DuplicateUser(email.clone())
                    }
                    _ => RecordRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn find_user_by_email(
        &self,
        email: &OwnerEmail,
    ) -> RecordRepositoryResult<Option<UserProfile>> {
        let lookup = email.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = user_profiles::table
                .filter(user_profiles::email.eq(lookup))
                .select(UserProfileRow::as_select())
                .first::<UserProfileRow>(connection)
                .optional()
                .map_err(RecordRepositoryError::persistence)?;
            row.map(row_to_profile).transpose()
        })
        .await
    }
}

fn to_new_row(record: &Record) -> NewRecordRow {
    NewRecordRow {
        id: record.id().into_inner(),
        owner_email: record.owner().as_str().to_owned(),
        record_name: record.record_name().to_owned(),
        analysis_result: record.analysis_result().to_owned(),
        kanban_records: record.kanban_records().to_owned(),
        created_at: record.created_at(),
        updated_at: record.updated_at(),
    }
}

fn row_to_record(row: RecordRow) -> RecordRepositoryResult<Record> {
    let owner = OwnerEmail::new(row.owner_email).map_err(RecordRepositoryError::persistence)?;
    Ok(Record::from_persisted(PersistedRecordData {
        id: RecordId::from_uuid(row.id),
        owner,
        record_name: row.record_name,
        analysis_result: row.analysis_result,
        kanban_records: row.kanban_records,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn row_to_profile(row: UserProfileRow) -> RecordRepositoryResult<UserProfile> {
    let email = OwnerEmail::new(row.email).map_err(RecordRepositoryError::persistence)?;
    let mut profile =
        UserProfile::new(email, row.username).map_err(RecordRepositoryError::persistence)?;
    if let Some(stored_age) = row.age {
        let age = u16::try_from(stored_age).map_err(RecordRepositoryError::persistence)?;
        profile = profile.with_age(age);
    }
    if let Some(location) = row.location {
        profile = profile.with_location(location);
    }
    Ok(profile)
}
