//! In-memory catalog
//!
//! Holds the contributor and project lists built once at start-up.
//! The lists are never mutated, so the catalog is shared freely behind `Arc`.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{Contributor, ContributorId, Difficulty, Project, ProjectId};
use crate::domain::ports::CatalogRepository;
use crate::error::DomainError;

#[derive(Debug, Clone)]
pub struct StaticCatalog {
    contributors: Vec<Contributor>,
    projects: Vec<Project>,
}

impl StaticCatalog {
    /// Build a catalog, rejecting duplicate ids within either list
    pub fn new(contributors: Vec<Contributor>, projects: Vec<Project>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        if let Some(dup) = contributors.iter().find(|c| !seen.insert(c.id)) {
            return Err(DomainError::Validation(format!(
                "Duplicate contributor id {}",
                dup.id
            )));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id)) {
            return Err(DomainError::Validation(format!(
                "Duplicate project id {}",
                dup.id
            )));
        }

        Ok(Self {
            contributors,
            projects,
        })
    }

    /// The event's demo data
    pub fn seeded() -> Result<Self, DomainError> {
        let contributors = vec![
            contributor(1, "Alice Johnson", 5, "👩‍💻", "2025-10-01")?,
            contributor(2, "Bob Smith", 3, "👨‍💻", "2025-10-02")?,
            contributor(3, "Carol Davis", 7, "👩‍🎨", "2025-10-01")?,
            contributor(4, "David Wilson", 4, "👨‍🚀", "2025-10-03")?,
            contributor(5, "Emma Brown", 6, "👩‍🔬", "2025-10-02")?,
        ];

        let projects = vec![
            project(
                1,
                "Frontend Dashboard",
                "TypeScript",
                "Beginner",
                12,
                "React-based dashboard for Hacktoberfest statistics",
            )?,
            project(
                2,
                "Backend API",
                "Node.js",
                "Intermediate",
                8,
                "Express.js API for managing Hacktoberfest data",
            )?,
            project(
                3,
                "Python Scripts",
                "Python",
                "Beginner",
                15,
                "Utility scripts for data processing and automation",
            )?,
        ];

        Self::new(contributors, projects)
    }
}

fn contributor(
    id: u32,
    name: &str,
    pr_count: u32,
    avatar: &str,
    joined: &str,
) -> Result<Contributor, DomainError> {
    let joined_date = NaiveDate::parse_from_str(joined, "%Y-%m-%d").map_err(|e| {
        DomainError::Validation(format!("Bad join date {:?} for {}: {}", joined, name, e))
    })?;

    Ok(Contributor {
        id: ContributorId(id),
        name: name.to_string(),
        pr_count,
        avatar: avatar.to_string(),
        joined_date,
    })
}

fn project(
    id: u32,
    name: &str,
    language: &str,
    difficulty: &str,
    open_issue_count: u32,
    description: &str,
) -> Result<Project, DomainError> {
    let difficulty = difficulty
        .parse::<Difficulty>()
        .map_err(|e| DomainError::Validation(format!("{} for {}", e, name)))?;

    Ok(Project {
        id: ProjectId(id),
        name: name.to_string(),
        language: language.to_string(),
        difficulty,
        open_issue_count,
        description: description.to_string(),
    })
}

#[async_trait]
impl CatalogRepository for StaticCatalog {
    async fn list_contributors(&self) -> Result<Vec<Contributor>, DomainError> {
        Ok(self.contributors.clone())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        Ok(self.projects.clone())
    }
}
