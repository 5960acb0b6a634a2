//! User notification entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::persistence::Entity;

/// An in-app notification addressed to one user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: i64,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub const TABLE: &'static str = "notifications";
    pub const COLUMNS: &'static str = "id, user_id, title, body, is_read, created_at";

    pub fn new(user_id: Uuid, title: String, body: String) -> Self {
        Self {
            id: 0,
            user_id,
            title,
            body,
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl Entity for Notification {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "UserId": self.user_id,
            "Title": self.title,
            "Body": self.body,
            "IsRead": self.is_read,
            "CreatedAt": self.created_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO notifications (user_id, title, body, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(self.user_id)
        .bind(&self.title)
        .bind(&self.body)
        .bind(self.is_read)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE notifications
            SET user_id = $1, title = $2, body = $3, is_read = $4
            WHERE id = $5
            "#,
        )
        .bind(self.user_id)
        .bind(&self.title)
        .bind(&self.body)
        .bind(self.is_read)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
