//! Fixtures wiring a [`PostgresRecordRepository`] to a fresh database.

pub use super::cluster::BoxError;
use super::cluster::{PostgresCluster, shared_cluster};
use careboard::record::{
    adapters::postgres::PostgresRecordRepository,
    domain::{OwnerEmail, PersistedRecordData, Record, RecordId},
};
use chrono::{DateTime, Utc};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use rstest::fixture;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Schema applied to the template database.
pub const CREATE_RECORDS_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_records/up.sql");

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "careboard_test_template";

/// Set to make a missing cluster fail the suite instead of skipping it.
pub const REQUIRE_POSTGRES_ENV: &str = "CAREBOARD_REQUIRE_POSTGRES";

/// Drops its database when it goes out of scope.
pub struct TemporaryDatabase {
    cluster: PostgresCluster,
    name: String,
}

impl TemporaryDatabase {
    /// Returns the connection URL of the database.
    #[must_use]
    pub fn url(&self) -> String {
        self.cluster.database_url(&self.name)
    }
}

impl Drop for TemporaryDatabase {
    fn drop(&mut self) {
        if let Err(err) = self.cluster.drop_database(&self.name) {
            tracing::warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}

/// Repository bound to its own database, plus a runtime to drive it.
///
/// Fields drop in declaration order, so the pool closes before the
/// database is dropped.
pub struct PreparedRepo {
    /// Repository under test.
    pub repo: PostgresRecordRepository,
    /// Runtime for the async repository calls.
    pub rt: Runtime,
    _temp_db: TemporaryDatabase,
}

/// Builds a repository on a database cloned from the migrated template.
///
/// Yields `Ok(None)` when no embedded cluster can be started here, unless
/// [`REQUIRE_POSTGRES_ENV`] is set.
///
/// # Errors
///
/// Returns an error if the template, the database, or the pool cannot be
/// created.
#[fixture]
pub fn prepared_repo() -> Result<Option<PreparedRepo>, BoxError> {
    let cluster = match shared_cluster() {
        Ok(cluster) => cluster,
        Err(err) if std::env::var_os(REQUIRE_POSTGRES_ENV).is_none() => {
            tracing::warn!(error = %err, "embedded PostgreSQL unavailable; skipping");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };
    cluster.ensure_template_exists(TEMPLATE_DB, apply_migrations)?;

    let name = format!("test_{}", Uuid::new_v4().simple());
    cluster.create_database_from_template(&name, TEMPLATE_DB)?;
    let temp_db = TemporaryDatabase { cluster, name };

    let pool = Pool::builder()
        .max_size(1)
        .build(ConnectionManager::<PgConnection>::new(temp_db.url()))?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    Ok(Some(PreparedRepo {
        repo: PostgresRecordRepository::new(pool),
        rt,
        _temp_db: temp_db,
    }))
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.batch_execute(CREATE_RECORDS_SQL)?;
    Ok(())
}

/// Returns a parsed owner email.
///
/// # Errors
///
/// Returns an error when `email` is not a valid address.
pub fn owner(email: &str) -> Result<OwnerEmail, BoxError> {
    Ok(OwnerEmail::new(email)?)
}

/// Builds an empty record with a fixed creation time.
#[must_use]
pub fn record_created_at(owner: &OwnerEmail, name: &str, created_at: DateTime<Utc>) -> Record {
    Record::from_persisted(PersistedRecordData {
        id: RecordId::new(),
        owner: owner.clone(),
        record_name: name.to_owned(),
        analysis_result: String::new(),
        kanban_records: String::new(),
        created_at,
        updated_at: created_at,
    })
}
