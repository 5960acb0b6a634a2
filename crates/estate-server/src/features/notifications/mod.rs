//! User notifications feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::notifications_routes;
