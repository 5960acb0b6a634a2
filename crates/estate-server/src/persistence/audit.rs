//! Audit capture and the append-only audit trail
//!
//! At commit time every effective pending change is snapshotted into one
//! `audit_logs` row: table identity, serialized key values, old/new scalar
//! values, capture timestamp, and acting user. Rows are never updated or
//! deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::PgConnection;
use tracing::debug;
use uuid::Uuid;

use super::entity::{ChangeState, PendingChange};

/// Action recorded for an inserted entity
pub const ACTION_CREATED: &str = "Created";
/// Action recorded for a modified entity
pub const ACTION_UPDATED: &str = "Updated";
/// Action recorded for a removed entity
pub const ACTION_DELETE: &str = "Delete";

/// An audit record about to be appended, produced by [`capture`]
#[derive(Debug, Clone, Serialize)]
pub struct NewAuditLog {
    pub table_name: String,
    pub action: &'static str,
    pub key_values: JsonValue,
    /// Null iff the action is `Created`
    pub old_values: Option<JsonValue>,
    /// Null iff the action is `Delete`
    pub new_values: Option<JsonValue>,
    /// Capture time, stamped when the snapshot is taken
    pub timestamp: DateTime<Utc>,
    /// Acting user; None for anonymous actions
    pub user_id: Option<Uuid>,
}

/// A persisted audit row, as read back from the store
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditLogEntry {
    pub id: i64,
    pub table_name: String,
    pub action: String,
    pub key_values: JsonValue,
    pub old_values: Option<JsonValue>,
    pub new_values: Option<JsonValue>,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<Uuid>,
}

impl AuditLogEntry {
    pub const TABLE: &'static str = "audit_logs";
    pub const COLUMNS: &'static str =
        "id, table_name, action, key_values, old_values, new_values, timestamp, user_id";
}

/// Snapshot pending changes into audit records
///
/// Produces exactly one record per effective change entry. No-op
/// modifications are skipped; audit rows themselves never pass through the
/// pending set, so they are never re-audited.
pub(crate) fn capture(changes: &[PendingChange], actor: Option<Uuid>) -> Vec<NewAuditLog> {
    changes
        .iter()
        .filter(|change| !change.is_unchanged())
        .map(|change| {
            let (action, old_values, new_values) = match &change.state {
                ChangeState::Added => {
                    (ACTION_CREATED, None, Some(change.entity.audit_snapshot()))
                },
                ChangeState::Modified { original } => (
                    ACTION_UPDATED,
                    Some(original.clone()),
                    Some(change.entity.audit_snapshot()),
                ),
                ChangeState::Deleted { original } => {
                    (ACTION_DELETE, Some(original.clone()), None)
                },
            };

            NewAuditLog {
                table_name: change.entity.table_name().to_string(),
                action,
                key_values: change.entity.key_values(),
                old_values,
                new_values,
                timestamp: Utc::now(),
                user_id: actor,
            }
        })
        .collect()
}

/// Append one audit record inside the caller's transaction
pub(crate) async fn append(conn: &mut PgConnection, record: &NewAuditLog) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO audit_logs (
            table_name, action, key_values, old_values, new_values, timestamp, user_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(&record.table_name)
    .bind(record.action)
    .bind(&record.key_values)
    .bind(&record.old_values)
    .bind(&record.new_values)
    .bind(record.timestamp)
    .bind(record.user_id)
    .execute(conn)
    .await?;

    debug!(
        table = %record.table_name,
        action = %record.action,
        "appended audit log entry"
    );

    Ok(())
}
