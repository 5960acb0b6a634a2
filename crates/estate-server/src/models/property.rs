//! Property listing entity

use std::any::Any;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use sqlx::PgConnection;

use crate::persistence::Entity;

/// A managed real-estate listing
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Asking price in whole currency units
    pub price: i64,
    pub city: String,
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area_sqm: Option<i32>,
    /// Listing status: available, sold, rented
    pub status: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Property {
    pub const TABLE: &'static str = "properties";
    pub const COLUMNS: &'static str = "id, title, description, price, city, address, bedrooms, \
         bathrooms, area_sqm, status, is_active, created_at, updated_at";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        description: Option<String>,
        price: i64,
        city: String,
        address: Option<String>,
        bedrooms: i32,
        bathrooms: i32,
        area_sqm: Option<i32>,
        status: String,
    ) -> Self {
        Self {
            id: 0,
            title,
            description,
            price,
            city,
            address,
            bedrooms,
            bathrooms,
            area_sqm,
            status,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[async_trait]
impl Entity for Property {
    fn table_name(&self) -> &'static str {
        Self::TABLE
    }

    fn key_values(&self) -> JsonValue {
        json!({ "Id": self.id })
    }

    fn audit_snapshot(&self) -> JsonValue {
        json!({
            "Title": self.title,
            "Description": self.description,
            "Price": self.price,
            "City": self.city,
            "Address": self.address,
            "Bedrooms": self.bedrooms,
            "Bathrooms": self.bathrooms,
            "AreaSqm": self.area_sqm,
            "Status": self.status,
            "IsActive": self.is_active,
            "CreatedAt": self.created_at,
            "UpdatedAt": self.updated_at,
        })
    }

    async fn insert(&mut self, conn: &mut PgConnection) -> sqlx::Result<()> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO properties (
                title, description, price, city, address, bedrooms, bathrooms,
                area_sqm, status, is_active, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.price)
        .bind(&self.city)
        .bind(&self.address)
        .bind(self.bedrooms)
        .bind(self.bathrooms)
        .bind(self.area_sqm)
        .bind(&self.status)
        .bind(self.is_active)
        .bind(self.created_at)
        .fetch_one(conn)
        .await?;
        self.id = id;
        Ok(())
    }

    async fn update(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            UPDATE properties
            SET title = $1, description = $2, price = $3, city = $4, address = $5,
                bedrooms = $6, bathrooms = $7, area_sqm = $8, status = $9,
                is_active = $10, updated_at = $11
            WHERE id = $12
            "#,
        )
        .bind(&self.title)
        .bind(&self.description)
        .bind(self.price)
        .bind(&self.city)
        .bind(&self.address)
        .bind(self.bedrooms)
        .bind(self.bathrooms)
        .bind(self.area_sqm)
        .bind(&self.status)
        .bind(self.is_active)
        .bind(self.updated_at)
        .bind(self.id)
        .execute(conn)
        .await?;
        Ok(())
    }

    async fn delete(&self, conn: &mut PgConnection) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(self.id)
            .execute(conn)
            .await?;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_property_defaults() {
        let property = Property::new(
            "Garden villa".to_string(),
            None,
            250_000,
            "Amman".to_string(),
            None,
            4,
            3,
            Some(320),
            "available".to_string(),
        );
        assert_eq!(property.id, 0);
        assert!(property.is_active);
        assert!(property.updated_at.is_none());
    }

    #[test]
    fn test_snapshot_excludes_identity_and_uses_platform_keys() {
        let property = Property::new(
            "A".to_string(),
            None,
            100,
            "Amman".to_string(),
            None,
            1,
            1,
            None,
            "available".to_string(),
        );
        let snapshot = property.audit_snapshot();
        assert_eq!(snapshot["Title"], json!("A"));
        assert_eq!(snapshot["Price"], json!(100));
        assert!(snapshot.get("Id").is_none());
        assert_eq!(property.key_values(), json!({ "Id": 0 }));
    }
}
