//! Create lead command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::{Lead, Property};
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLeadCommand {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub property_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateLeadCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Name", &self.name)?;
        validation::max_length("Name", &self.name, 200)?;
        validation::required("Email", &self.email)?;
        validation::email("Email", &self.email)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreateLeadCommand,
) -> Result<Envelope<Lead>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    // A lead may reference a property, but only one that exists.
    if let Some(property_id) = command.property_id {
        let queries = QueryRepository::new(pool.clone());
        let filter = SqlFilter::new().eq_i64("id", Some(property_id));
        if queries
            .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
            .await?
            .is_none()
        {
            return Ok(Envelope::fail("Property not found"));
        }
    }

    let lead = Lead::new(
        command.name,
        command.email,
        command.phone,
        command.property_id,
        command.message,
    );

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Lead>().add(lead);
    uow.save_changes().await?;

    let lead = uow.entity(tracked).clone();
    tracing::info!(lead_id = lead.id, "lead created");
    Ok(Envelope::ok_with_message(lead, "Lead created successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> CreateLeadCommand {
        CreateLeadCommand {
            name: "Rana".to_string(),
            email: "rana@example.com".to_string(),
            phone: None,
            property_id: None,
            message: Some("Interested in viewing".to_string()),
        }
    }

    #[test]
    fn test_validation_rejects_bad_email() {
        let mut command = valid_command();
        command.email = "not-an-email".to_string();
        assert_eq!(
            command.validate(),
            Err(ValidationError::Email { field: "Email" })
        );
    }

    #[sqlx::test]
    async fn test_handle_creates_lead_with_new_status(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(pool, None, valid_command()).await?;
        assert!(envelope.success);
        let lead = envelope.data.expect("created lead");
        assert!(lead.id > 0);
        assert_eq!(lead.status, "new");
        Ok(())
    }

    #[sqlx::test]
    async fn test_handle_rejects_unknown_property_reference(
        pool: PgPool,
    ) -> Result<(), AppError> {
        let mut command = valid_command();
        command.property_id = Some(404);

        let envelope = handle(pool.clone(), None, command).await?;
        assert!(!envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Property not found"));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leads")
            .fetch_one(&pool)
            .await
            .map_err(AppError::Database)?;
        assert_eq!(count, 0);
        Ok(())
    }
}
