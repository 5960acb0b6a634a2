//! Notification API routes
//!
//! - `POST /api/v1/notifications` - Create a notification for a user
//! - `GET /api/v1/notifications` - List the caller's notifications
//! - `PUT /api/v1/notifications/:id/read` - Mark one of the caller's
//!   notifications as read
//!
//! Listing and marking require an authenticated caller.

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Notification;

use super::commands::{self, CreateNotificationCommand, MarkNotificationReadCommand};
use super::queries::{self, ListNotificationsQuery};

pub fn notifications_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_notifications).post(create_notification))
        .route("/:id/read", put(mark_notification_read))
}

async fn create_notification(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreateNotificationCommand>,
) -> Result<Envelope<Notification>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_notifications(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Envelope<Vec<Notification>>, AppError> {
    let user_id = user.require_id()?;
    queries::list::handle(pool, user_id, query).await
}

async fn mark_notification_read(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Envelope<Notification>, AppError> {
    let user_id = user.require_id()?;
    commands::mark_read::handle(pool, user_id, MarkNotificationReadCommand { id }).await
}
