//! Catalog service
//!
//! Read-side use cases over the fixed contributor and project lists.

use std::sync::Arc;

use crate::domain::entities::{Contributor, Project};
use crate::domain::ports::CatalogRepository;
use crate::error::DomainError;

/// Sort contributors by PR count, highest first.
///
/// The sort is stable: contributors with equal counts keep their catalog order.
pub fn rank_contributors(mut contributors: Vec<Contributor>) -> Vec<Contributor> {
    contributors.sort_by(|a, b| b.pr_count.cmp(&a.pr_count));
    contributors
}

pub struct CatalogService<C: CatalogRepository + ?Sized> {
    catalog: Arc<C>,
}

impl<C: CatalogRepository + ?Sized> CatalogService<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Contributors ranked for the leaderboard
    pub async fn leaderboard(&self) -> Result<Vec<Contributor>, DomainError> {
        let contributors = self.catalog.list_contributors().await?;
        Ok(rank_contributors(contributors))
    }

    /// Projects in catalog order
    pub async fn projects(&self) -> Result<Vec<Project>, DomainError> {
        self.catalog.list_projects().await
    }
}
