//! Contributor handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::Contributor;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ContributorResponse {
    pub id: u32,
    pub name: String,
    pub prs: u32,
    pub avatar: String,
    /// `YYYY-MM-DD`
    pub joined: String,
}

impl From<Contributor> for ContributorResponse {
    fn from(c: Contributor) -> Self {
        Self {
            id: c.id.0,
            name: c.name,
            prs: c.pr_count,
            avatar: c.avatar,
            joined: c.joined_date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// GET /api/contributors
///
/// Leaderboard order: PR count descending, ties in catalog order.
pub async fn list_contributors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContributorResponse>>, AppError> {
    let contributors = state.catalog_service.leaderboard().await?;

    Ok(Json(contributors.into_iter().map(Into::into).collect()))
}
