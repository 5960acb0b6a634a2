//! Contact form submission entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

/// A message submitted through the public contact form
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub const TABLE: &'static str = "contacts";
    pub const COLUMNS: &'static str = "id, name, email, phone, subject, message, created_at";

    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        subject: Option<String>,
        message: String,
    ) -> Self {
        Self {
            id: 0,
            name,
            email,
            phone,
            subject,
            message,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl Entity for Contact {
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
            "Subject": self.subject,
            "Message": self.message,
            "CreatedAt": self.created_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contacts (name, email, phone, subject, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(&self.subject)
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
            UPDATE contacts
            SET name = $1, email = $2, phone = $3, subject = $4, message = $5
            WHERE id = $6
            "#,
        )
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone)
        .bind(&self.subject)
        .bind(&self.message)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
