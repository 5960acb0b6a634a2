//! List notifications query
//!
//! Always scoped to the calling user; there is no cross-user listing.

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::Notification;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListNotificationsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub is_read: Option<bool>,
}

#[tracing::instrument(skip(pool, query), fields(user = %user_id))]
pub async fn handle(
    pool: PgPool,
    user_id: Uuid,
    query: ListNotificationsQuery,
) -> Result<Envelope<Vec<Notification>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = SqlFilter::new()
        .eq_uuid("user_id", Some(user_id))
        .eq_bool("is_read", query.is_read);
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(Notification::TABLE, &filter).await?;
    let items = queries
        .page::<Notification>(
            Notification::TABLE,
            Notification::COLUMNS,
            &filter,
            "created_at DESC, id DESC",
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let meta = PaginationMeta::for_params(&pagination, total);
    Ok(Envelope::paginated(items, meta))
}
