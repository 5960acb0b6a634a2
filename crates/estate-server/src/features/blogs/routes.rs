//! Blog API routes
//!
//! - `POST /api/v1/blogs` - Create a post
//! - `GET /api/v1/blogs` - List posts with sparse filters
//! - `GET /api/v1/blogs/:slug` - Fetch one post by slug

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::models::Blog;

use super::commands::{self, CreateBlogCommand};
use super::queries::{self, GetBlogQuery, ListBlogsQuery};

pub fn blogs_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_blogs).post(create_blog))
        .route("/:slug", get(get_blog))
}

async fn create_blog(
    State(pool): State<PgPool>,
    user: CurrentUser,
    Json(command): Json<CreateBlogCommand>,
) -> Result<Envelope<Blog>, AppError> {
    commands::create::handle(pool, user.id, command).await
}

async fn list_blogs(
    State(pool): State<PgPool>,
    Query(query): Query<ListBlogsQuery>,
) -> Result<Envelope<Vec<Blog>>, AppError> {
    queries::list::handle(pool, query).await
}

async fn get_blog(
    State(pool): State<PgPool>,
    Path(slug): Path<String>,
) -> Result<Envelope<Blog>, AppError> {
    queries::get::handle(pool, GetBlogQuery { slug }).await
}
