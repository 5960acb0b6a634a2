//! Update maintenance request status command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::MaintenanceRequest;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

pub const ALLOWED_STATUSES: &[&str] = &["open", "in_progress", "resolved", "cancelled"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMaintenanceStatusCommand {
    /// Set from the path parameter, not the body
    #[serde(default)]
    pub id: i64,
    pub status: String,
}

impl UpdateMaintenanceStatusCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::one_of(
            "Status",
            &self.status,
            ALLOWED_STATUSES,
            "open, in_progress, resolved, cancelled",
        )
    }
}

#[tracing::instrument(skip(pool), fields(request_id = command.id, status = %command.status))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: UpdateMaintenanceStatusCommand,
) -> Result<Envelope<MaintenanceRequest>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.id));
    let Some(original) = queries
        .one::<MaintenanceRequest>(
            MaintenanceRequest::TABLE,
            MaintenanceRequest::COLUMNS,
            &filter,
        )
        .await?
    else {
        return Ok(Envelope::fail("Maintenance request not found"));
    };

    let mut updated = original.clone();
    updated.status = command.status;
    updated.updated_at = Some(Utc::now());

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow
        .repository::<MaintenanceRequest>()
        .update(&original, updated);
    uow.save_changes().await?;

    let request = uow.entity(tracked).clone();
    tracing::info!(request_id = request.id, "maintenance request status updated");
    Ok(Envelope::ok_with_message(
        request,
        "Maintenance request updated successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::maintenance_requests::commands::create::{
        self, CreateMaintenanceRequestCommand,
    };
    use crate::features::properties::commands::create as create_property;

    async fn seed_request(pool: &PgPool) -> MaintenanceRequest {
        let property = create_property::CreatePropertyCommand {
            title: "A".to_string(),
            description: None,
            price: 100,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        let property_id = create_property::handle(pool.clone(), None, property)
            .await
            .expect("seed property")
            .data
            .expect("seeded property")
            .id;

        let command = CreateMaintenanceRequestCommand {
            property_id,
            title: "Leaky tap".to_string(),
            description: None,
            priority: "medium".to_string(),
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed request")
            .data
            .expect("seeded request")
    }

    #[sqlx::test]
    async fn test_handle_moves_ticket_to_resolved(pool: PgPool) -> Result<(), AppError> {
        let seeded = seed_request(&pool).await;
        let command = UpdateMaintenanceStatusCommand {
            id: seeded.id,
            status: "resolved".to_string(),
        };

        let envelope = handle(pool, None, command).await?;
        assert!(envelope.success);
        let request = envelope.data.expect("request");
        assert_eq!(request.status, "resolved");
        assert!(request.updated_at.is_some());
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_missing_request_fails_softly(pool: PgPool) -> Result<(), AppError> {
        let command = UpdateMaintenanceStatusCommand {
            id: 1,
            status: "resolved".to_string(),
        };
        let envelope = handle(pool, None, command).await?;
        assert!(!envelope.success);
        assert_eq!(
            envelope.message.as_deref(),
            Some("Maintenance request not found")
        );
        Ok(())
    }
}
