//! Update lead status command

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Lead;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

pub const ALLOWED_STATUSES: &[&str] = &["new", "contacted", "qualified", "closed"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLeadStatusCommand {
    /// Set from the path parameter, not the body
    #[serde(default)]
    pub id: i64,
    pub status: String,
}

impl UpdateLeadStatusCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::one_of(
            "Status",
            &self.status,
            ALLOWED_STATUSES,
            "new, contacted, qualified, closed",
        )
    }
}

#[tracing::instrument(skip(pool), fields(lead_id = command.id, status = %command.status))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: UpdateLeadStatusCommand,
) -> Result<Envelope<Lead>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new().eq_i64("id", Some(command.id));
    let Some(original) = queries
        .one::<Lead>(Lead::TABLE, Lead::COLUMNS, &filter)
        .await?
    else {
        return Ok(Envelope::fail("Lead not found"));
    };

    let mut updated = original.clone();
    updated.status = command.status;
    updated.updated_at = Some(Utc::now());

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Lead>().update(&original, updated);
    uow.save_changes().await?;

    let lead = uow.entity(tracked).clone();
    tracing::info!(lead_id = lead.id, "lead status updated");
    Ok(Envelope::ok_with_message(
        lead,
        "Lead status updated successfully",
    ))
}
