//! Stats handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::StatsSnapshot;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "totalPRs")]
    pub total_prs: u32,
    pub contributors: u32,
    pub repositories: u32,
    pub badges: u32,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(s: StatsSnapshot) -> Self {
        Self {
            total_prs: s.total_prs,
            contributors: s.contributors,
            repositories: s.repositories,
            badges: s.badges,
        }
    }
}

/// GET /api/stats
///
/// A new random snapshot on every call.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.stats_service.snapshot().into())
}
