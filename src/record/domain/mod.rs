//! Domain model for patient records and their owners.
//!
//! Records are created by the records service and mutated only through
//! partial updates of their analysis and board fields.

mod error;
mod ids;
mod record;
mod update;
mod user;

pub use error::RecordDomainError;
pub use ids::{MAX_EMAIL_CHARS, OwnerEmail, RecordId};
pub use record::{MAX_RECORD_NAME_CHARS, PersistedRecordData, Record};
pub use update::RecordUpdate;
pub use user::{MAX_USERNAME_CHARS, UserProfile};
