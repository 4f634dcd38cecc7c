//! Data sources feeding the dashboard
//!
//! A source never fails outright: anything it could not fetch comes back as
//! `None` and the dashboard keeps what it already shows.

use anyhow::Result;
use async_trait::async_trait;

use crate::client::StatsClient;
use crate::models::{Contributor, Project, StatsSnapshot};

/// Counters shown by the simulated load
pub const SIMULATED_STATS: StatsSnapshot = StatsSnapshot {
    total_prs: 42,
    contributors: 18,
    repositories: 3,
    badges: 25,
};

/// Result of one load; `None` fields were unavailable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedData {
    pub stats: Option<StatsSnapshot>,
    pub contributors: Option<Vec<Contributor>>,
    pub projects: Option<Vec<Project>>,
}

#[async_trait]
pub trait DashboardSource: Send + Sync {
    async fn load(&self) -> LoadedData;
}

/// Fixed demo counters, no network
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource;

#[async_trait]
impl DashboardSource for SimulatedSource {
    async fn load(&self) -> LoadedData {
        LoadedData {
            stats: Some(SIMULATED_STATS),
            ..LoadedData::default()
        }
    }
}

/// Live data from the stats API
#[derive(Clone)]
pub struct ApiSource {
    client: StatsClient,
}

impl ApiSource {
    pub fn new(client: StatsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardSource for ApiSource {
    async fn load(&self) -> LoadedData {
        let (stats, contributors, projects) = tokio::join!(
            self.client.get_stats(),
            self.client.get_contributors(),
            self.client.get_projects(),
        );

        LoadedData {
            stats: absorb("stats", stats),
            contributors: absorb("contributors", contributors),
            projects: absorb("projects", projects),
        }
    }
}

fn absorb<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to fetch {}: {:#}", what, e);
            None
        }
    }
}
