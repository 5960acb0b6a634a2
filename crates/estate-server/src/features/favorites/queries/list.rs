//! List saved properties query
//!
//! Joined against the property row so the client can render the saved list
//! without extra lookups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::persistence::{QueryRepository, SqlFilter};

const FROM: &str = "favorites f JOIN properties p ON p.id = f.property_id";
const COLUMNS: &str = "f.id, f.property_id, p.title, p.city, p.price, p.status, f.created_at";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteListItem {
    pub id: i64,
    pub property_id: i64,
    pub title: String,
    pub city: String,
    pub price: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListFavoritesQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[tracing::instrument(skip(pool, query), fields(user = %user_id))]
pub async fn handle(
    pool: PgPool,
    user_id: Uuid,
    query: ListFavoritesQuery,
) -> Result<Envelope<Vec<FavoriteListItem>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = SqlFilter::new().eq_uuid("f.user_id", Some(user_id));
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(FROM, &filter).await?;
    let items = queries
        .page::<FavoriteListItem>(
            FROM,
            COLUMNS,
            &filter,
            "f.created_at DESC, f.id DESC",
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let meta = PaginationMeta::for_params(&pagination, total);
    Ok(Envelope::paginated(items, meta))
}
