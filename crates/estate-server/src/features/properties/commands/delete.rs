//! Delete property command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Property;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePropertyCommand {
    pub id: i64,
}

#[tracing::instrument(skip(pool), fields(property_id = command.id))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: DeletePropertyCommand,
) -> Result<Envelope<()>, AppError> {
    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.id));
    let Some(property) = queries
        .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
        .await?
    else {
        return Ok(Envelope::fail("Property not found"));
    };

    let mut uow = UnitOfWork::new(pool, actor);
    uow.repository::<Property>().delete(property);
    uow.save_changes().await?;

    tracing::info!(property_id = command.id, "property deleted");
    Ok(Envelope::message_only("Property deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::properties::commands::create::{self, CreatePropertyCommand};

    #[sqlx::test]
    async fn test_handle_deletes_row_and_audits_final_state(
        pool: PgPool,
    ) -> Result<(), AppError> {
        let command = CreatePropertyCommand {
            title: "A".to_string(),
            description: None,
            price: 100,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 2,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        let created = create::handle(pool.clone(), None, command)
            .await?
            .data
            .expect("created property");

        let envelope = handle(pool.clone(), None, DeletePropertyCommand { id: created.id }).await?;
        assert!(envelope.success);

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
            .fetch_one(&pool)
            .await
            .map_err(AppError::Database)?;
        assert_eq!(remaining, 0);

        let (old_values, new_values): (serde_json::Value, Option<serde_json::Value>) =
            sqlx::query_as("SELECT old_values, new_values FROM audit_logs WHERE action = 'Delete'")
                .fetch_one(&pool)
                .await
                .map_err(AppError::Database)?;
        assert_eq!(old_values["Title"], serde_json::json!("A"));
        assert!(new_values.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_missing_property_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(pool, None, DeletePropertyCommand { id: 42 }).await?;
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Property not found"));
        Ok(())
    }
}
