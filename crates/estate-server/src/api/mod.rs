//! HTTP API surface shared across features

pub mod response;

pub use response::Envelope;
