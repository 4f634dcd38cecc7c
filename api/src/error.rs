//! Unified error types for the Hacktoberfest API
//!
//! - `DomainError`: Core business logic errors
//! - `AppError`: Application layer errors, rendered as JSON HTTP responses
//!
//! Every error body has the shape `{error, message}`. Internal failures are
//! rendered with a redacted message; the real detail travels in an
//! [`ErrorDetail`] response extension so the development-mode middleware can
//! surface it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Title used for every 500 response
pub const INTERNAL_ERROR_TITLE: &str = "Something went wrong!";

/// Message shown for 500 responses outside development mode
pub const REDACTED_MESSAGE: &str = "Internal Server Error";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// No route matched; carries the requested path and query
    #[error("Route {0} not found")]
    RouteNotFound(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Unredacted failure message attached to 500 responses
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::RouteNotFound(path) => not_found_response(format!("Route {} not found", path)),
            AppError::Domain(DomainError::Validation(msg))
            | AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Request failed: {}", msg);
                internal_error_response(msg)
            }
        }
    }
}

fn not_found_response(message: String) -> Response {
    let body = Json(ErrorResponse {
        error: "Not Found".to_string(),
        message,
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Build the redacted 500 response, keeping `detail` as an extension
pub fn internal_error_response(detail: String) -> Response {
    let body = Json(ErrorResponse {
        error: INTERNAL_ERROR_TITLE.to_string(),
        message: REDACTED_MESSAGE.to_string(),
    });

    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
    response.extensions_mut().insert(ErrorDetail(detail));
    response
}
