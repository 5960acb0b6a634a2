//! Sales lead entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

/// An inbound sales lead, optionally tied to a listed property
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_id: Option<i64>,
    /// Pipeline status: new, contacted, qualified, closed
    pub status: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Lead {
    pub const TABLE: &'static str = "leads";
    pub const COLUMNS: &'static str =
        "id, name, email, phone, property_id, status, message, created_at, updated_at";

    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        property_id: Option<i64>,
        message: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            name,
            email,
            phone,
            property_id,
            status: "new".to_string(),
            message,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[async_trait]
impl Entity for Lead {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "Name": self.name,
            "Email": self.email,
            "Phone": self.phone,
            "PropertyId": self.property_id,
            "Status": self.status,
            "Message": self.message,
            "CreatedAt": self.created_at,
            "UpdatedAt": self.updated_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO leads (name, email, phone, property_id, status, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(self.property_id)
        .bind(&self.status)
        .bind(&self.message)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE leads
            SET name = $1, email = $2, phone = $3, property_id = $4, status = $5,
                message = $6, updated_at = $7
            WHERE id = $8
            "#,
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(self.property_id)
        .bind(&self.status)
        .bind(&self.message)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
