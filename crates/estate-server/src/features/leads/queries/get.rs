//! Get single lead query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::models::Lead;
use crate::persistence::{QueryRepository, SqlFilter};

#[derive(Debug, Clone, Deserialize)]
pub struct GetLeadQuery {
    pub id: i64,
}

#[tracing::instrument(skip(pool), fields(lead_id = query.id))]
pub async fn handle(pool: PgPool, query: GetLeadQuery) -> Result<Envelope<Lead>, AppError> {
    let queries = QueryRepository::new(pool);
    let filter = SqlFilter::new().eq_i64("id", Some(query.id));

    match queries.one::<Lead>(Lead::TABLE, Lead::COLUMNS, &filter).await? {
        Some(lead) => Ok(Envelope::ok(lead)),
        None => Ok(Envelope::fail("Lead not found")),
    }
}
