//! The entity contract and in-flight change entries
//!
//! Every persisted record implements [`Entity`]: it names its table, exposes
//! its primary-key values and an auditable scalar snapshot, and knows how to
//! write itself to the store. Snapshots are an explicit per-entity field
//! list, not runtime introspection, so relations can never leak into the
//! audit trail.

use std::any::Any;

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::PgConnection;

/// A persisted record tracked by the unit of work
#[async_trait]
pub trait Entity: Any + Send + Sync {
    /// Table the entity persists to
    fn table_name(&self) -> &'static str;

    /// Primary-key values as an ordered map, serialized for the audit trail
    fn key_values(&self) -> JsonValue;

    /// Scalar column snapshot used for audit old/new values
    ///
    /// Keys use the platform's historical PascalCase field names. Relations
    /// are excluded.
    fn audit_snapshot(&self) -> JsonValue;

    /// Insert the entity; assigns the store-generated identity on success
    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()>;

    /// Update the row matching the entity's identity
    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()>;

    /// Delete the row matching the entity's identity
    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()>;

    fn as_any(&self) -> &dyn Any;
}

/// Transition kind of a pending change entry
#[derive(Debug, Clone)]
pub(crate) enum ChangeState {
    Added,
    Modified { original: JsonValue },
    Deleted { original: JsonValue },
}

/// One entity's recorded transition awaiting commit
///
/// Exists only between enqueue and the unit of work's `save_changes`.
pub(crate) struct PendingChange {
    pub entity: Box<dyn Entity>,
    pub state: ChangeState,
}

impl PendingChange {
    /// A modification whose current snapshot equals the original is a no-op;
    /// it is neither written nor audited. Handlers refresh `UpdatedAt` on
    /// every write attempt, so the stamp is excluded from the comparison.
    pub fn is_unchanged(&self) -> bool {
        match &self.state {
            ChangeState::Modified { original } => {
                without_write_stamp(original) == without_write_stamp(&self.entity.audit_snapshot())
            },
            ChangeState::Added | ChangeState::Deleted { .. } => false,
        }
    }
}

fn without_write_stamp(snapshot: &JsonValue) -> JsonValue {
    let mut stripped = snapshot.clone();
    if let Some(fields) = stripped.as_object_mut() {
        fields.remove("UpdatedAt");
    }
    stripped
}
