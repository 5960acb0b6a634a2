//! Favorites API routes
//!
//! - `GET /api/v1/favorites` - List the caller's saved properties
//! - `POST /api/v1/favorites` - Save a property
//! - `DELETE /api/v1/favorites/:property_id` - Remove a saved property
//!
//! Every endpoint requires an authenticated caller.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Favorite;

use super::commands::{self, AddFavoriteCommand, RemoveFavoriteCommand};
use super::queries::{self, FavoriteListItem, ListFavoritesQuery};

pub fn favorites_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/:property_id", axum::routing::delete(remove_favorite))
}

async fn add_favorite(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<AddFavoriteCommand>,
) -> Result<Envelope<Favorite>, AppError> {
    let user_id = user.require_id()?;
    commands::add::handle(pool, user_id, command).await
}

async fn list_favorites(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Query(query): Query<ListFavoritesQuery>,
) -> Result<Envelope<Vec<FavoriteListItem>>, AppError> {
    let user_id = user.require_id()?;
    queries::list::handle(pool, user_id, query).await
}

async fn remove_favorite(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Path(property_id): Path<i64>,
) -> Result<Envelope<()>, AppError> {
    let user_id = user.require_id()?;
    commands::remove::handle(pool, user_id, RemoveFavoriteCommand { property_id }).await
}
