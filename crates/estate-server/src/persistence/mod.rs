//! Persistence pipeline
//!
//! The write path goes through a [`UnitOfWork`]: entity mutations are
//! enqueued against tracked repository handles and committed as one database
//! transaction by `save_changes`. Audit capture runs inside that same
//! transaction, so business data and its audit trail commit atomically.
//!
//! The read path goes through [`QueryRepository`], which never touches the
//! unit of work's pending set: listing, filtering, and pagination are plain
//! non-tracking queries built with [`SqlFilter`].

pub mod audit;
pub mod entity;
pub mod query;
pub mod unit_of_work;

pub use audit::{AuditLogEntry, NewAuditLog};
pub use entity::Entity;
pub use query::{QueryRepository, SqlFilter};
pub use unit_of_work::{Repository, Tracked, UnitOfWork};

use thiserror::Error;

/// Errors surfaced by the persistence layer
///
/// Concurrency conflicts and duplicate keys are distinct kinds so callers
/// can decide between retrying, reporting a conflict, and failing.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store detected a conflicting concurrent update
    #[error("conflicting concurrent update: {0}")]
    Conflict(String),

    /// Unique constraint violation
    #[error("duplicate record: {0}")]
    Duplicate(String),

    /// Any other driver or query failure
    #[error("database query failed: {0}")]
    Sqlx(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_unique_violation() {
                return StoreError::Duplicate(db.message().to_string());
            }
            // serialization_failure / deadlock_detected
            if matches!(db.code().as_deref(), Some("40001") | Some("40P01")) {
                return StoreError::Conflict(db.message().to_string());
            }
        }
        StoreError::Sqlx(err)
    }
}
