//! Activity log API routes
//!
//! - `POST /api/v1/activity-logs` - Record a user-facing action
//! - `GET /api/v1/activity-logs` - List entries, newest first

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::ActivityLog;

use super::commands::{self, LogActivityCommand};
use super::queries::{self, ListActivityLogsQuery};

pub fn activity_logs_routes() -> Router<PgPool> {
    Router::new().route("/", get(list_activity).post(log_activity))
}

async fn log_activity(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<LogActivityCommand>,
) -> Result<Envelope<ActivityLog>, AppError> {
    commands::log::handle(pool, user.id, command).await
}

async fn list_activity(
    State(pool): State<PgPool>,
    Query(query): Query<ListActivityLogsQuery>,
) -> Result<Envelope<Vec<ActivityLog>>, AppError> {
    queries::list::handle(pool, query).await
}
