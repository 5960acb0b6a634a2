//! List leads query
//!
//! Rows are eager-loaded with the referenced property's title through a left
//! join; leads without a property reference come back with a null title.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::persistence::{QueryRepository, SqlFilter};

const FROM: &str = "leads l LEFT JOIN properties p ON p.id = l.property_id";
const COLUMNS: &str = "l.id, l.name, l.email, l.phone, l.property_id, p.title AS property_title, \
     l.status, l.message, l.created_at, l.updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeadListItem {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_id: Option<i64>,
    pub property_title: Option<String>,
    pub status: String,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListLeadsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub property_id: Option<i64>,
    pub email: Option<String>,
}

impl ListLeadsQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_text("l.status", self.status.clone())
            .eq_i64("l.property_id", self.property_id)
            .eq_text("l.email", self.email.clone())
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListLeadsQuery,
) -> Result<Envelope<Vec<LeadListItem>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(FROM, &filter).await?;
    let items = queries
        .page::<LeadListItem>(
            FROM,
            COLUMNS,
            &filter,
            "l.created_at DESC, l.id DESC",
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
    use crate::features::leads::commands::create::{self, CreateLeadCommand};
    use crate::features::properties::commands::create as create_property;

    async fn seed_property(pool: &PgPool, title: &str) -> i64 {
        let command = create_property::CreatePropertyCommand {
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
        create_property::handle(pool.clone(), None, command)
            .await
            .expect("seed property")
            .data
            .expect("seeded property")
            .id
    }

    async fn seed_lead(pool: &PgPool, email: &str, property_id: Option<i64>) {
        let command = CreateLeadCommand {
            name: "Rana".to_string(),
            email: email.to_string(),
            phone: None,
            property_id,
            message: None,
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed lead");
    }

    #[sqlx::test]
    async fn test_list_joins_property_title(pool: PgPool) -> Result<(), AppError> {
        let property_id = seed_property(&pool, "Garden Villa").await;
        seed_lead(&pool, "a@example.com", Some(property_id)).await;
        seed_lead(&pool, "b@example.com", None).await;

        let envelope = handle(pool, ListLeadsQuery::default()).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 2);

        let with_property = items
            .iter()
            .find(|item| item.property_id.is_some())
            .expect("lead with property");
        assert_eq!(with_property.property_title.as_deref(), Some("Garden Villa"));

        let without_property = items
            .iter()
            .find(|item| item.property_id.is_none())
            .expect("lead without property");
        assert!(without_property.property_title.is_none());
        Ok(())
    }

    #[sqlx::test]
    async fn test_status_filter(pool: PgPool) -> Result<(), AppError> {
        seed_lead(&pool, "a@example.com", None).await;

        let query = ListLeadsQuery {
            status: Some("closed".to_string()),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        assert!(envelope.data.expect("items").is_empty());
        assert_eq!(envelope.pagination.expect("meta").total_count, 0);
        Ok(())
    }
}
