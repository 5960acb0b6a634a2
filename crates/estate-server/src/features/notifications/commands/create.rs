//! Create notification command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::validation::{self, ValidationError};
use crate::models::Notification;
use crate::persistence::UnitOfWork;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotificationCommand {
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
}

impl CreateNotificationCommand {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("Title", &self.title)?;
        validation::max_length("Title", &self.title, 200)?;
        validation::required("Body", &self.body)?;
        Ok(())
    }
}

#[tracing::instrument(skip(pool, command), fields(recipient = %command.user_id))]
pub async fn handle(
    pool: PgPool,
    actor: Option<Uuid>,
    command: CreateNotificationCommand,
) -> Result<Envelope<Notification>, AppError> {
    if let Err(rule) = command.validate() {
        return Ok(Envelope::fail(rule.to_string()));
    }

    let notification = Notification::new(command.user_id, command.title, command.body);

    let mut uow = UnitOfWork::new(pool, actor);
    let tracked = uow.repository::<Notification>().add(notification);
    uow.save_changes().await?;

    let notification = uow.entity(tracked).clone();
    tracing::info!(notification_id = notification.id, "notification created");
    Ok(Envelope::ok_with_message(
        notification,
        "Notification created successfully",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    async fn test_handle_creates_unread_notification(pool: PgPool) -> Result<(), AppError> {
        let command = CreateNotificationCommand {
            user_id: Uuid::new_v4(),
            title: "Viewing booked".to_string(),
            body: "Your viewing is confirmed for Tuesday".to_string(),
        };

        let envelope = handle(pool, None, command).await?;
        assert!(envelope.success);
        let notification = envelope.data.expect("notification");
        assert!(!notification.is_read);
        assert!(notification.id > 0);
        Ok(())
    }

    #[test]
    fn test_validation_requires_title() {
        let command = CreateNotificationCommand {
            user_id: Uuid::new_v4(),
            title: " ".to_string(),
            body: "Body".to_string(),
        };
        assert_eq!(
            command.validate(),
            Err(ValidationError::Required { field: "Title" })
        );
    }
}
