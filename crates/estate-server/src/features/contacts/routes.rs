//! Contact API routes
//!
//! - `POST /api/v1/contacts` - Submit the public contact form
//! - `GET /api/v1/contacts` - List submissions (back office)

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Contact;

use super::commands::{self, CreateContactCommand};
use super::queries::{self, ListContactsQuery};

pub fn contacts_routes() -> Router<PgPool> {
    Router::new().route("/", get(list_contacts).post(create_contact))
}

async fn create_contact(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreateContactCommand>,
) -> Result<Envelope<Contact>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_contacts(
    State(pool): State<PgPool>,
    Query(query): Query<ListContactsQuery>,
) -> Result<Envelope<Vec<Contact>>, AppError> {
    queries::list::handle(pool, query).await
}
