//! Property listings feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::properties_routes;
