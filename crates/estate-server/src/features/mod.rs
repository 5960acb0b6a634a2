//! Feature modules (CQRS architecture)
//!
//! Each feature is a vertical slice: commands (writes, audited through the
//! unit of work), queries (reads, never audited), and the route wiring.

pub mod activity_logs;
pub mod audit_logs;
pub mod blogs;
pub mod contacts;
pub mod favorites;
pub mod leads;
pub mod maintenance_requests;
pub mod notifications;
pub mod properties;
pub mod shared;

use axum::Router;
use sqlx::PgPool;

/// Compose every feature router under its API prefix
pub fn router(pool: PgPool) -> Router {
    Router::new()
        .nest("/properties", properties::properties_routes())
        .nest("/leads", leads::leads_routes())
        .nest("/contacts", contacts::contacts_routes())
        .nest(
            "/maintenance-requests",
            maintenance_requests::maintenance_requests_routes(),
        )
        .nest("/blogs", blogs::blogs_routes())
        .nest("/notifications", notifications::notifications_routes())
        .nest("/favorites", favorites::favorites_routes())
        .nest("/activity-logs", activity_logs::activity_logs_routes())
        .nest("/audit-logs", audit_logs::audit_logs_routes())
        .with_state(pool)
}
