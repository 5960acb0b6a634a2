//! Maintenance requests feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::maintenance_requests_routes;
