//! Server error types
//!
//! `AppError` covers infrastructure failures surfaced to HTTP. Domain
//! outcomes (validation failures, missing records) are not errors here; they
//! travel as unsuccessful response envelopes with a descriptive message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::api::Envelope;
use crate::persistence::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Common(#[from] estate_common::EstateError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store(StoreError::Conflict(_)) => (
                StatusCode::CONFLICT,
                "The record was modified by another request; please retry".to_string(),
            ),
            AppError::Store(StoreError::Duplicate(_)) => {
                (StatusCode::CONFLICT, "The record already exists".to_string())
            },
            AppError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.clone()),
            // Internal details stay in the logs, not in the response body.
            AppError::Database(_) | AppError::Store(_) | AppError::Common(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        (status, Envelope::<()>::fail(message)).into_response()
    }
}
