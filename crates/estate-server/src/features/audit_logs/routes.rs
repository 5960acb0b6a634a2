//! Audit trail API routes
//!
//! - `GET /api/v1/audit-logs` - List audit entries with sparse filters

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;

use crate::api::Envelope;
use crate::error::AppError;
use crate::persistence::AuditLogEntry;

use super::queries::{self, ListAuditLogsQuery};

pub fn audit_logs_routes() -> Router<PgPool> {
    Router::new().route("/", get(list_audit_logs))
}

async fn list_audit_logs(
    State(pool): State<PgPool>,
    Query(query): Query<ListAuditLogsQuery>,
) -> Result<Envelope<Vec<AuditLogEntry>>, AppError> {
    queries::list::handle(pool, query).await
}
