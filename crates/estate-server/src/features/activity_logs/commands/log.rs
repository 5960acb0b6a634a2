//! Log activity command
//!
//! Validation is fail-fast: the first broken rule is reported and nothing is
//! written. A successful write always answers with the same confirmation
//! message.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::ActivityLog;
use crate::persistence::UnitOfWork;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogActivityCommand {
    pub user_id: String,
    pub action: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl LogActivityCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("UserId", &self.user_id)?;
        validation::required("Action", &self.action)?;
        validation::max_length("Action", &self.action, 200)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(action = %command.action))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: LogActivityCommand,
) -> Result<Envelope<ActivityLog>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let entry = ActivityLog::new(command.user_id, command.action, command.description);

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<ActivityLog>().add(entry);
    uow.save_changes().await?;

    let entry = uow.entity(tracked).clone();
    Ok(Envelope::ok_with_message(
        entry,
        "Activity logged successfully",
    ))
}
