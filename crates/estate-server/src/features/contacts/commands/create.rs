//! Create contact submission command
//!
//! The contact form is public; the acting user is usually anonymous, so
//! audit rows for contact submissions carry a null user id.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Contact;
use crate::persistence::UnitOfWork;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateContactCommand {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

impl CreateContactCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Name", &self.name)?;
        validation::required("Email", &self.email)?;
        validation::email("Email", &self.email)?;
        validation::required("Message", &self.message)?;
        validation::max_length("Message", &self.message, 5000)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(email = %command.email))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreateContactCommand,
) -> Result<Envelope<Contact>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let contact = Contact::new(
        command.name,
        command.email,
        command.phone,
        command.subject,
        command.message,
    );

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Contact>().add(contact);
    uow.save_changes().await?;

    let contact = uow.entity(tracked).clone();
    tracing::info!(contact_id = contact.id, "contact submission stored");
    Ok(Envelope::ok_with_message(
        contact,
        "Message sent successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_command() -> CreateContactCommand {
        CreateContactCommand {
            name: "Omar".to_string(),
            email: "omar@example.com".to_string(),
            phone: None,
            subject: Some("Viewing request".to_string()),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_validation_requires_message() {
        let mut command = valid_command();
        command.message = String::new();
        assert_eq!(
            command.validate(),
            Err(ValidationError::Required { field: "Message" })
        );
    }

    #[sqlx::test]
    async fn test_handle_stores_submission_anonymously(pool: PgPool) -> Result<(), AppError> {
        let envelope = handle(pool.clone(), None, valid_command()).await?;
        assert!(envelope.success);
        assert!(envelope.data.expect("contact").id > 0);

        let user_id: Option<Uuid> = sqlx::query_scalar(
            "SELECT user_id FROM audit_logs WHERE table_name = 'contacts'",
        )
        .fetch_one(&pool)
        .await
        .map_err(AppError::Database)?;
        assert!(user_id.is_none());
        Ok(())
    }
}
