//! Saved-property favorite entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;
use uuid::Uuid;

use crate::persistence::Entity;

/// A user's bookmark on a property; unique per (user, property) pair
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: Uuid,
    pub property_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub const TABLE: &'static str = "favorites";
    pub const COLUMNS: &'static str = "id, user_id, property_id, created_at";

    pub fn new(user_id: Uuid, property_id: i64) -> Self {
        Self {
            id: 0,
            user_id,
            property_id,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl Entity for Favorite {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "UserId": self.user_id,
            "PropertyId": self.property_id,
            "CreatedAt": self.created_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO favorites (user_id, property_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(self.user_id)
        .bind(self.property_id)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("UPDATE favorites SET user_id = $1, property_id = $2 WHERE id = $3")
            .bind(self.user_id)
            .bind(self.property_id)
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
