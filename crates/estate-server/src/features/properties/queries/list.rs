//! List properties query
//!
//! Sparse filtering: every filter field is optional and contributes a
//! condition only when set, so `GET /properties` with no parameters returns
//! the full paginated listing.

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::features::shared::pagination::{PaginationMeta, PaginationParams};
use crate::models::Property;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ListPropertiesQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub title_contains: Option<String>,
    pub is_active: Option<bool>,
}

impl ListPropertiesQuery {
    fn filter(&self) -> SqlFilter {
        SqlFilter::new()
            .eq_text("city", self.city.clone())
            .eq_text("status", self.status.clone())
            .ge_i64("price", self.min_price)
            .le_i64("price", self.max_price)
            .contains("title", self.title_contains.clone())
            .eq_bool("is_active", self.is_active)
    }
}

#[tracing::instrument(skip(pool, query), fields(page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListPropertiesQuery,
) -> Result<Envelope<Vec<Property>>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = query.filter();
    let pagination = PaginationParams::new(query.page, query.per_page);

    let total = queries.count(Property::TABLE, &filter).await?;
    let items = queries
        .page::<Property>(
            Property::TABLE,
            Property::COLUMNS,
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
    use crate::features::properties::commands::create::{self, CreatePropertyCommand};

    async fn seed(pool: &PgPool, title: &str, city: &str, price: i64, status: &str) {
        let command = CreatePropertyCommand {
            title: title.to_string(),
            description: None,
            price,
            city: city.to_string(),
            address: None,
            bedrooms: 2,
            bathrooms: 1,
            area_sqm: None,
            status: status.to_string(),
        };
        create::handle(pool.clone(), None, command)
            .await
            .expect("seed property");
    }

    #[sqlx::test]
    async fn test_unfiltered_list_returns_everything(pool: PgPool) -> Result<(), AppError> {
        seed(&pool, "A", "Amman", 100, "available").await;
        seed(&pool, "B", "Irbid", 200, "sold").await;

        let envelope = handle(pool, ListPropertiesQuery::default()).await?;
        assert!(envelope.success);
        assert_eq!(envelope.data.expect("items").len(), 2);
        assert_eq!(envelope.pagination.expect("meta").total_count, 2);
        Ok(())
    }

    #[sqlx::test]
    async fn test_filters_are_and_composed(pool: PgPool) -> Result<(), AppError> {
        seed(&pool, "Cheap in Amman", "Amman", 100, "available").await;
        seed(&pool, "Pricey in Amman", "Amman", 900, "available").await;
        seed(&pool, "Cheap in Irbid", "Irbid", 100, "available").await;

        let query = ListPropertiesQuery {
            city: Some("Amman".to_string()),
            max_price: Some(500),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let items = envelope.data.expect("items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Cheap in Amman");
        Ok(())
    }

    #[sqlx::test]
    async fn test_title_filter_is_case_insensitive(pool: PgPool) -> Result<(), AppError> {
        seed(&pool, "Garden Villa", "Amman", 300, "available").await;
        seed(&pool, "City flat", "Amman", 120, "available").await;

        let query = ListPropertiesQuery {
            title_contains: Some("villa".to_string()),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        assert_eq!(envelope.data.expect("items").len(), 1);
        Ok(())
    }

    #[sqlx::test]
    async fn test_pagination_counts_before_slicing(pool: PgPool) -> Result<(), AppError> {
        for i in 0..5 {
            seed(&pool, &format!("P{i}"), "Amman", 100 + i, "available").await;
        }

        let query = ListPropertiesQuery {
            page: Some(2),
            per_page: Some(2),
            ..Default::default()
        };
        let envelope = handle(pool, query).await?;
        let meta = envelope.pagination.expect("meta");
        assert_eq!(envelope.data.expect("items").len(), 2);
        assert_eq!(meta.total_count, 5);
        assert_eq!(meta.total_pages, 3);
        Ok(())
    }
}
