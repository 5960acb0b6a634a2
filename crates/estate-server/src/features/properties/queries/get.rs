//! Get single property query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Property;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize)]
pub struct GetPropertyQuery {
    pub id: i64,
}

#[tracing::instrument(skip(pool), fields(property_id = query.id))]
pub async fn handle(pool: PgPool, query: GetPropertyQuery) -> Result<Envelope<Property>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = SqlFilter::new().eq_i64("id", Some(query.id));

    match queries
        .one::<Property>(Property::TABLE, Property::COLUMNS, &filter)
        .await?
    {
        Some(property) => Ok(Envelope::ok(property)),
        None => Ok(Envelope::fail("Property not found")),
    }
}
