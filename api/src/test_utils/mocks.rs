//! Mock implementations of port traits

use async_trait::async_trait;

use crate::domain::entities::{Contributor, Project};
use crate::domain::ports::CatalogRepository;
use crate::error::DomainError;

/// Catalog whose every read fails with `DomainError::Internal`
pub struct FailingCatalog {
    message: String,
}

impl FailingCatalog {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait]
impl CatalogRepository for FailingCatalog {
    async fn list_contributors(&self) -> Result<Vec<Contributor>, DomainError> {
        Err(DomainError::Internal(self.message.clone()))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        Err(DomainError::Internal(self.message.clone()))
    }
}

/// Catalog whose every read panics
pub struct PanickingCatalog;

#[async_trait]
impl CatalogRepository for PanickingCatalog {
    async fn list_contributors(&self) -> Result<Vec<Contributor>, DomainError> {
        panic!("contributor list corrupted")
    }

    async fn list_projects(&self) -> Result<Vec<Project>, DomainError> {
        panic!("project list corrupted")
    }
}
