//! List activity log entries query
//!
//! Newest first; reads never mutate the log.

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::ActivityLog;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListActivityLogsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub user_id: Option<String>,
    pub action: Option<String>,
}

impl ListActivityLogsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_text("user_id", self.user_id.clone())
            .eq_text("action", self.action.clone())
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListActivityLogsQuery,
) -> Result<Envelope<Vec<ActivityLog>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(ActivityLog::TABLE, &filter).await?;
    let items = queries
        .page::<ActivityLog>(
            ActivityLog::TABLE,
            ActivityLog::COLUMNS,
            &filter,
            "created_at DESC, id DESC",
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let meta = PaginationMeta::for_params(&pagination, total);
    Ok(Envelope::paginated(items, meta))
}
