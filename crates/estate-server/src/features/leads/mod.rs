//! Sales leads feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::leads_routes;
