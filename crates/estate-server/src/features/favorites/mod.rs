//! Saved properties feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::favorites_routes;
