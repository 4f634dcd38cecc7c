//! Development-mode error details

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::{ErrorDetail, ErrorResponse, INTERNAL_ERROR_TITLE};
use crate::AppState;

/// Replace the redacted 500 message with the real failure detail.
///
/// Only active in development mode; otherwise responses pass through
/// untouched.
pub async fn expose_error_details(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    if !state.config.environment.is_development() {
        return response;
    }

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    let body = Json(ErrorResponse {
        error: INTERNAL_ERROR_TITLE.to_string(),
        message: detail,
    });

    (status, body).into_response()
}
