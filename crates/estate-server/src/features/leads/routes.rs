//! Lead API routes
//!
//! - `POST /api/v1/leads` - Capture a new lead
//! - `GET /api/v1/leads` - List leads with the referenced property title
//! - `GET /api/v1/leads/:id` - Fetch one lead
//! - `PUT /api/v1/leads/:id/status` - Move a lead through the pipeline

use axum::extract::{Path, Query, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Lead;

use super::commands::{self, CreateLeadCommand, UpdateLeadStatusCommand};
use super::queries::{self, GetLeadQuery, LeadListItem, ListLeadsQuery};

pub fn leads_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_leads).post(create_lead))
        .route("/:id", get(get_lead))
        .route("/:id/status", put(update_lead_status))
}

async fn create_lead(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreateLeadCommand>,
) -> Result<Envelope<Lead>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_leads(
    State(pool): State<PgPool>,
    Query(query): Query<ListLeadsQuery>,
) -> Result<Envelope<Vec<LeadListItem>>, AppError> {
    queries::list::handle(pool, query).await
}

async fn get_lead(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Envelope<Lead>, AppError> {
    queries::get::handle(pool, GetLeadQuery { id }).await
}

async fn update_lead_status(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdateLeadStatusCommand>,
) -> Result<Envelope<Lead>, AppError> {
    command.id = id;
    commands::update_status::handle(pool, user.id, command).await
}
