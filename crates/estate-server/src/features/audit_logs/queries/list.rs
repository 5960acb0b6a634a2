//! List audit trail entries query

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::persistence::{AuditLogEntry, QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListAuditLogsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub table_name: Option<String>,
    pub action: Option<String>,
    pub user_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ListAuditLogsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_text("table_name", self.table_name.clone())
            .eq_text("action", self.action.clone())
            .eq_uuid("user_id", self.user_id)
            .since("timestamp", self.from)
            .until("timestamp", self.to)
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListAuditLogsQuery,
) -> Result<Envelope<Vec<AuditLogEntry>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(AuditLogEntry::TABLE, &filter).await?;
    let items = queries
        .page::<AuditLogEntry>(
            AuditLogEntry::TABLE,
            AuditLogEntry::COLUMNS,
            &filter,
            "timestamp DESC, id DESC",
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    let meta = PaginationMeta::for_params(&pagination, total);
    Ok(Envelope::paginated(items, meta))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::properties::commands::create::{self, CreatePropertyCommand};
    use crate::features::properties::commands::delete::{self as delete_cmd, DeletePropertyCommand};

    async fn seed_property(pool: &PgPool, title: &str) -> i64 {
        let command = CreatePropertyCommand {
            title: title.to_string(),
            description: None,
            price: 100,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed property")
            .data
            .expect("seeded property")
            .id
    }

    #[sqlx::test]
    async fn test_list_filters_by_action(pool: PgPool) -> Result<(), AppError> {
        let id = seed_property(&pool, "A").await;
        seed_property(&pool, "B").await;
        delete_cmd::handle(pool.clone(), None, DeletePropertyCommand { id }).await?;

        let query = ListAuditLogsQuery {
            action: Some("Delete".to_string()),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].action, "Delete");
        assert_eq!(items[0].table_name, "properties");
        Ok(())
    }

    #[sqlx::test]
    async fn test_list_filters_by_actor(pool: PgPool) -> Result<(), AppError> {
        let actor = Uuid::new_v4();
        let command = CreatePropertyCommand {
            title: "A".to_string(),
            description: None,
            price: 100,
            city: "Amman".to_string(),
            address: None,
            bedrooms: 1,
            bathrooms: 1,
            area_sqm: None,
            status: "available".to_string(),
        };
        create::handle(pool.clone(), Some(actor), command).await?;
        seed_property(&pool, "B").await;

        let query = ListAuditLogsQuery {
            user_id: Some(actor),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].user_id, Some(actor));
        Ok(())
    }
}
