//! Blog post entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

/// An editorial post published on the public site
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    /// URL identifier, unique across all posts
    pub slug: String,
    pub body: String,
    pub author: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blog {
    pub const TABLE: &'static str = "blogs";
    pub const COLUMNS: &'static str =
        "id, title, slug, body, author, published, created_at, updated_at";

    pub fn new(title: String, slug: String, body: String, author: Option<String>) -> Self {
        Self {
            id: 0,
            title,
            slug,
            body,
            author,
            published: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[async_trait]
impl Entity for Blog {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "Title": self.title,
            "Slug": self.slug,
            "Body": self.body,
            "Author": self.author,
            "Published": self.published,
            "CreatedAt": self.created_at,
            "UpdatedAt": self.updated_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO blogs (title, slug, body, author, published, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&self.title)
        .bind(&self.slug)
        .bind(&self.body)
        .bind(&self.author)
        .bind(self.published)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE blogs
            SET title = $1, slug = $2, body = $3, author = $4, published = $5, updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(&self.title)
        .bind(&self.slug)
        .bind(&self.body)
        .bind(&self.author)
        .bind(self.published)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
