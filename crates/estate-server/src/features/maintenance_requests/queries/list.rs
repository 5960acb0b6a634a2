//! List maintenance requests query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::MaintenanceRequest;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListMaintenanceRequestsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub property_id: Option<i64>,
    pub status: Option<String>,
    pub priority: Option<String>,
}

impl ListMaintenanceRequestsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_i64("property_id", self.property_id)
            .eq_text("status", self.status.clone())
            .eq_text("priority", self.priority.clone())
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListMaintenanceRequestsQuery,
) -> Result<Envelope<Vec<MaintenanceRequest>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(MaintenanceRequest::TABLE, &filter).await?;
    let items = queries
        .page::<MaintenanceRequest>(
            MaintenanceRequest::TABLE,
            MaintenanceRequest::COLUMNS,
            &filter,
            "created_at DESC, id DESC",
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
    use crate::features::maintenance_requests::commands::create::{
        self, CreateMaintenanceRequestCommand,
    };
    use crate::features::properties::commands::create as create_property;

    #[sqlx::test]
    async fn test_list_filters_by_priority(pool: PgPool) -> Result<(), AppError> {
        let property = create_property::CreatePropertyCommand {
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
        let property_id = create_property::handle(pool.clone(), None, property)
            .await?
            .data
            .expect("seeded property")
            .id;

        for priority in ["low", "urgent"] {
            let command = CreateMaintenanceRequestCommand {
                property_id,
                title: format!("Ticket {priority}"),
                description: None,
                priority: priority.to_string(),
            };
            create::handle(pool.clone(), None, command).await?;
        }

        let query = ListMaintenanceRequestsQuery {
            priority: Some("urgent".to_string()),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].priority, "urgent");
        Ok(())
    }
}
