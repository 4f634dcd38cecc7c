//! Catalog port
//!
//! Read-only access to the contributor and project lists.
//! There is no write path: catalogs are built once at start-up.

use async_trait::async_trait;

use crate::domain::entities::{Contributor, Project};
use crate::error::DomainError;

/// Read accessors for the fixed contributor and project lists
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All contributors, in catalog order
    async fn list_contributors(&self) -> Result<Vec<Contributor>, DomainError>;

    /// All projects, in catalog order
    async fn list_projects(&self) -> Result<Vec<Project>, DomainError>;
}
