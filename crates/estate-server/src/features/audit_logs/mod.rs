//! Audit trail feature (read-only)
//!
//! The trail is written exclusively by the unit of work at commit time;
//! this feature only exposes it for inspection.

pub mod queries;
pub mod routes;

pub use routes::audit_logs_routes;
