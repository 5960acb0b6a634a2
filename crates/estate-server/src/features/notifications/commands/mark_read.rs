//! Mark notification read command
//!
//! Only the addressed user may mark a notification as read. Marking an
//! already-read notification again is a no-op and produces no audit row.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Notification;
use crate::persistence::{QueryRepository, SqlFilter, UnitOfWork};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkNotificationReadCommand {
    pub id: i64,
}

#[tracing::instrument(skip(pool), fields(notification_id = command.id, user = %user_id))]
pub async fn handle(
    pool: PgPool,
    user_id: Uuid,
    command: MarkNotificationReadCommand,
) -> Result<Envelope<Notification>, AppError> {
    let queries = QueryRepository::new(pool.clone());
    let filter = SqlFilter::new()
        .eq_i64("id", Some(command.id))
        .eq_uuid("user_id", Some(user_id));
    let Some(original) = queries
        .one::<Notification>(Notification::TABLE, Notification::COLUMNS, &filter)
        .await?
    else {
        return Ok(Envelope::fail("Notification not found"));
    };

    let mut updated = original.clone();
    updated.is_read = true;

    let mut uow = UnitOfWork::new(pool, Some(user_id));
    let tracked = uow.repository::<Notification>().update(&original, updated);
    uow.save_changes().await?;

    let notification = uow.entity(tracked).clone();
    Ok(Envelope::ok_with_message(
        notification,
        "Notification marked as read",
    ))
}
