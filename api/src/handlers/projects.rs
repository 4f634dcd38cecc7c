//! Project handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::domain::entities::Project;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: u32,
    pub name: String,
    pub language: String,
    pub difficulty: String,
    pub issues: u32,
    pub description: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            language: p.language,
            difficulty: p.difficulty.to_string(),
            issues: p.open_issue_count,
            description: p.description,
        }
    }
}

/// GET /api/projects
///
/// Participating projects, unsorted.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = state.catalog_service.projects().await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}
