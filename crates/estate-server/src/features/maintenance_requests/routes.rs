//! Maintenance request API routes
//!
//! - `POST /api/v1/maintenance-requests` - Open a ticket
//! - `GET /api/v1/maintenance-requests` - List tickets with sparse filters
//! - `PUT /api/v1/maintenance-requests/:id/status` - Move a ticket

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::MaintenanceRequest;

use super::commands::{self, CreateMaintenanceRequestCommand, UpdateMaintenanceStatusCommand};
use super::queries::{self, ListMaintenanceRequestsQuery};

pub fn maintenance_requests_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id/status", put(update_request_status))
}

async fn create_request(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreateMaintenanceRequestCommand>,
) -> Result<Envelope<MaintenanceRequest>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_requests(
    State(pool): State<PgPool>,
    Query(query): Query<ListMaintenanceRequestsQuery>,
) -> Result<Envelope<Vec<MaintenanceRequest>>, AppError> {
    queries::list::handle(pool, query).await
}

async fn update_request_status(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateMaintenanceStatusCommand>,
) -> Result<Envelope<MaintenanceRequest>, AppError> {
    command.id = id;
    commands::update_status::handle(pool, user.id, command).await
}
