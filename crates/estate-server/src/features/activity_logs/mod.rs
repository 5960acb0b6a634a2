//! Activity log feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::activity_logs_routes;
