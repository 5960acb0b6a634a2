//! Contact form feature

pub mod commands;
pub mod queries;
pub mod routes;

pub use routes::contacts_routes;
