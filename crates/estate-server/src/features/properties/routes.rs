//! Property API routes
//!
//! - `POST /api/v1/properties` - Create a listing
//! - `GET /api/v1/properties` - List with pagination and sparse filters
//! - `GET /api/v1/properties/:id` - Fetch one listing
//! - `PUT /api/v1/properties/:id` - Replace a listing
//! - `DELETE /api/v1/properties/:id` - Remove a listing

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Property;

use super::commands::{self, CreatePropertyCommand, DeletePropertyCommand, UpdatePropertyCommand};
use super::queries::{self, GetPropertyQuery, ListPropertiesQuery};

pub fn properties_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route(
            "/:id",
            get(get_property).put(update_property).delete(delete_property),
        )
}

async fn create_property(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreatePropertyCommand>,
) -> Result<Envelope<Property>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_properties(
    State(pool): State<PgPool>,
    Query(query): Query<ListPropertiesQuery>,
) -> Result<Envelope<Vec<Property>>, AppError> {
    queries::list::handle(pool, query).await
}

async fn get_property(
    State(pool): State<PgPool>,
    Path(id): Path<i64>,
) -> Result<Envelope<Property>, AppError> {
    queries::get::handle(pool, GetPropertyQuery { id }).await
}

async fn update_property(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(mut command): Json<UpdatePropertyCommand>,
) -> Result<Envelope<Property>, AppError> {
    command.id = id;
    commands::update::handle(pool, user.id, command).await
}

async fn delete_property(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Envelope<()>, AppError> {
    commands::delete::handle(pool, user.id, DeletePropertyCommand { id }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_smoke() {
        let router = properties_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
