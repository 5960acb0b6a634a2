//! Create maintenance request command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::{MaintenanceRequest, Property};
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

pub const ALLOWED_PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMaintenanceRequestCommand {
    pub property_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "medium".to_string()
}

impl CreateMaintenanceRequestCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::positive("PropertyId", self.property_id)?;
        validation::required("Title", &self.title)?;
        validation::max_length("Title", &self.title, 200)?;
        validation::one_of(
            "Priority",
            &self.priority,
            ALLOWED_PRIORITIES,
            "low, medium, high, urgent",
        )?;
        Ok(())
    }
}

#[tracing::instrument(
    skip(pool, command),
    fields(property_id = command.property_id, priority = %command.priority)
)]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreateMaintenanceRequestCommand,
) -> Result<Envelope<MaintenanceRequest>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.property_id));
    if queries
        .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
        .await?
        .is_none()
    {
        return Ok(Envelope::fail("Property not found"));
    }

    let request = MaintenanceRequest::new(
        command.property_id,
        command.title,
        command.description,
        command.priority,
    );

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<MaintenanceRequest>().add(request);
    uow.save_changes().await?;

    let request = uow.entity(tracked).clone();
    tracing::info!(request_id = request.id, "maintenance request created");
    Ok(Envelope::ok_with_message(
        request,
        "Maintenance request created successfully",
    ))
}
