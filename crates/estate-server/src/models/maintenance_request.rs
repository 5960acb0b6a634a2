//! Maintenance request entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

/// A maintenance ticket raised against a property
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub property_id: i64,
    pub title: String,
    pub description: Option<String>,
    /// low, medium, high, urgent
    pub priority: String,
    /// open, in_progress, resolved, cancelled
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl MaintenanceRequest {
    pub const TABLE: &'static str = "maintenance_requests";
    pub const COLUMNS: &'static str =
        "id, property_id, title, description, priority, status, created_at, updated_at";

    pub fn new(
        property_id: i64,
        title: String,
        description: Option<String>,
        priority: String,
    ) -> Self {
        Self {
            id: 0,
            property_id,
            title,
            description,
            priority,
            status: "open".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[async_trait]
impl Entity for MaintenanceRequest {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "PropertyId": self.property_id,
            "Title": self.title,
            "Description": self.description,
            "Priority": self.priority,
            "Status": self.status,
            "CreatedAt": self.created_at,
            "UpdatedAt": self.updated_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO maintenance_requests (
                property_id, title, description, priority, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(self.property_id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(&self.priority)
        .bind(&self.status)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE maintenance_requests
            SET property_id = $1, title = $2, description = $3, priority = $4,
                status = $5, updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(self.property_id)
        .bind(&self.title)
        .bind(&self.description)
        .bind(&self.priority)
        .bind(&self.status)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
