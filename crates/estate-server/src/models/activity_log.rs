//! Application activity log entity
//!
//! Distinct from the persistence-level audit trail: activity entries are
//! written deliberately by handlers to record user-facing actions, while
//! audit rows are captured automatically at commit time.

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityLog {
    pub id: i64,
    /// Free-form identifier of the acting user; callers decide the shape
    pub user_id: String,
    pub action: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    pub const TABLE: &'static str = "activity_logs";
    pub const COLUMNS: &'static str = "id, user_id, action, description, created_at";

    pub fn new(user_id: String, action: String, description: Option<String>) -> Self {
        Self {
            id: 0,
            user_id,
            action,
            description,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl Entity for ActivityLog {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "UserId": self.user_id,
            "Action": self.action,
            "Description": self.description,
            "CreatedAt": self.created_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO activity_logs (user_id, action, description, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&self.user_id)
        .bind(&self.action)
        .bind(&self.description)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            "UPDATE activity_logs SET user_id = $1, action = $2, description = $3 WHERE id = $4",
        )
        .bind(&self.user_id)
        .bind(&self.action)
        .bind(&self.description)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM activity_logs WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
