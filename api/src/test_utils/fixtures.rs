//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::app::{CatalogService, StatsRanges, StatsService};
use crate::config::{Config, Environment};
use crate::domain::entities::{Contributor, ContributorId, Difficulty, Project, ProjectId};
use crate::domain::ports::CatalogRepository;
use crate::AppState;

/// Create a test contributor who joined on the first day of the event
pub fn test_contributor(id: u32, name: &str, pr_count: u32) -> Contributor {
    Contributor {
        id: ContributorId(id),
        name: name.to_string(),
        pr_count,
        avatar: "🧑‍💻".to_string(),
        joined_date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
    }
}

/// Create a beginner-friendly test project
pub fn test_project(id: u32, name: &str) -> Project {
    Project {
        id: ProjectId(id),
        name: name.to_string(),
        language: "Rust".to_string(),
        difficulty: Difficulty::Beginner,
        open_issue_count: 1,
        description: format!("{} test project", name),
    }
}

/// App state over `catalog` with default stats ranges
pub fn test_state(environment: Environment, catalog: Arc<dyn CatalogRepository>) -> AppState {
    AppState {
        stats_service: Arc::new(StatsService::new(StatsRanges::standard().unwrap())),
        catalog_service: Arc::new(CatalogService::new(catalog)),
        config: Config {
            port: 0,
            environment,
        },
    }
}
