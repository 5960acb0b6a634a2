//! Uniform response envelope
//!
//! Every endpoint answers with the same shape: a success flag, an optional
//! human-readable message, an optional payload, and optional pagination
//! metadata. Domain failures (validation, not found) are unsuccessful
//! envelopes delivered with HTTP 200; transport-level status codes are
//! reserved for infrastructure errors.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::features::shared::pagination::PaginationMeta;

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            pagination: None,
        }
    }

    /// Successful response with payload and message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            pagination: None,
        }
    }

    /// Successful response with no payload
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            pagination: None,
        }
    }

    /// Unsuccessful domain outcome with a descriptive message
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            pagination: None,
        }
    }

    /// Successful page of results with pagination metadata
    pub fn paginated(data: T, pagination: PaginationMeta) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            pagination: Some(pagination),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
