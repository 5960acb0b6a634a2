//! Update property command
//!
//! Full replace of the mutable fields. The previous row state is snapshotted
//! into the audit trail; a write that changes nothing is skipped entirely.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Property;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

use super::create::ALLOWED_STATUSES;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePropertyCommand {
    /// Set from the path parameter, not the body
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[serde(default)]
    pub area_sqm: Option<i32>,
    pub status: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

impl UpdatePropertyCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Title", &self.title)?;
        validation::max_length("Title", &self.title, 200)?;
        validation::required("City", &self.city)?;
        validation::positive("Price", self.price)?;
        validation::one_of(
            "Status",
            &self.status,
            ALLOWED_STATUSES,
            "available, sold, rented",
        )?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(property_id = command.id))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: UpdatePropertyCommand,
) -> Result<Envelope<Property>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.id));
    let Some(original) = queries
        .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
        .await?
    else {
        return Ok(Envelope::fail("Property not found"));
    };

    let updated = Property {
        id: original.id,
        title: command.title,
        description: command.description,
        price: command.price,
        city: command.city,
        address: command.address,
        bedrooms: command.bedrooms,
        bathrooms: command.bathrooms,
        area_sqm: command.area_sqm,
        status: command.status,
        is_active: command.is_active,
        created_at: original.created_at,
        updated_at: Some(Utc::now()),
    };

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Property>().update(&original, updated);
    uow.save_changes().await?;

    let property = uow.entity(tracked).clone();
    tracing::info!(property_id = property.id, "property updated");
    Ok(Envelope::ok_with_message(
        property,
        "Property updated successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::properties::commands::create;

    fn update_command(id: i64, price: i64) -> UpdatePropertyCommand {
        UpdatePropertyCommand {
            id,
            title: "A".to_string(),
            description: None,
            price,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 2,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
            is_active: true,
        }
    }

    async fn seed_property(pool: &PgPool, title: &str, price: i64) -> Property {
        let command = create::CreatePropertyCommand {
            title: title.to_string(),
            description: None,
            price,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 2,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed property")
            .data
            .expect("seeded property payload")
    }

    #[sqlx::test]
    async fn test_handle_updates_row_and_audits_old_and_new(
        pool: PgPool,
    ) -> Result<(), AppError> {
        let seeded = seed_property(&pool, "A", 100).await;

        let envelope = handle(pool.clone(), None, update_command(seeded.id, 150)).await?;
        assert!(envelope.success);
        assert_eq!(envelope.data.expect("updated property").price, 150);

        let (old_values, new_values): (serde_json::Value, serde_json::Value) = sqlx::query_as(
            "SELECT old_values, new_values FROM audit_logs WHERE action = 'Updated'",
        )
        .fetch_one(&pool)
        .await
        .map_err(AppError::Database)?;
        assert_eq!(old_values["Price"], serde_json::json!(100));
        assert_eq!(new_values["Price"], serde_json::json!(150));
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_missing_property_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(pool, None, update_command(999, 150)).await?;
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Property not found"));
        Ok(())
    }

    #[sqlx::test]
    async fn test_resubmitting_identical_update_writes_no_audit_row(
        pool: PgPool,
    ) -> Result<(), AppError> {
        let seeded = seed_property(&pool, "A", 100).await;

        handle(pool.clone(), None, update_command(seeded.id, 150)).await?;
        let envelope = handle(pool.clone(), None, update_command(seeded.id, 150)).await?;
        assert!(envelope.success);

        let updates: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM audit_logs \
             WHERE table_name = 'properties' AND action = 'Updated'",
        )
        .fetch_one(&pool)
        .await
        .map_err(AppError::Database)?;
        assert_eq!(updates, 1);
        Ok(())
    }
}
