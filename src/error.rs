//! Error types and error handling for the application
//!
//! This module defines custom error types that can be converted to HTTP responses.
//! All errors implement `IntoResponse` to provide consistent error formatting.

use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
///
/// Every failure is terminal for the current request and is rendered as a status
/// code plus a JSON message. None of them take the process down.
#[derive(Error, Debug)]
pub enum AppError {
    /// No entity with the given id
    #[error("{0}")]
    NotFound(String),

    /// Missing required fields or an unparseable body
    #[error("{0}")]
    BadRequest(String),

    /// Identifier already taken
    #[error("{0}")]
    Conflict(String),

    /// Backend service could not be reached or returned an unreadable response
    #[error("Backend unavailable: {0}")]
    BadGateway(String),

    /// Backend service did not answer within the configured timeout
    #[error("Backend timed out: {0}")]
    GatewayTimeout(String),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Invalid(_) => AppError::BadRequest(err.to_string()),
            StoreError::AlreadyExists { .. } => AppError::Conflict(err.to_string()),
            StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
