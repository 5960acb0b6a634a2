//! Estate Server Library
//!
//! HTTP backend for a real-estate management platform.
//!
//! # Architecture
//!
//! The server follows a **CQRS** layout over a shared persistence core:
//!
//! - **Commands** (write operations) go through the [`persistence::UnitOfWork`]:
//!   changes are enqueued and committed atomically, and every effective write
//!   leaves a row in the append-only `audit_logs` table with the old and new
//!   field values and the acting user.
//! - **Queries** (read operations) use the non-tracking
//!   [`persistence::QueryRepository`] with sparse AND-composed filters and
//!   offset pagination. Reads are never audited.
//!
//! Every endpoint answers with the uniform [`api::Envelope`] shape; domain
//! failures such as validation errors or missing records are unsuccessful
//! envelopes, while infrastructure failures map to transport-level status
//! codes through [`error::AppError`].

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod models;
pub mod persistence;

pub use error::AppError;
