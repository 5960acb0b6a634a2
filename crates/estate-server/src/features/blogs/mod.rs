//! Blog posts feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::blogs_routes;
