//! Fallback for unmatched routes and methods

use axum::extract::OriginalUri;

use crate::error::AppError;

/// Echoes the requested path (and query) back in a 404
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    tracing::debug!(path = %path, "No route matched");
    AppError::RouteNotFound(path)
}
