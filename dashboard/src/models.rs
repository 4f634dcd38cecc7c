//! Response models for the stats API

use serde::Deserialize;

/// Aggregate counters shown on the stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct StatsSnapshot {
    #[serde(rename = "totalPRs")]
    pub total_prs: u32,
    pub contributors: u32,
    pub repositories: u32,
    pub badges: u32,
}

/// Leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    #[allow(dead_code)]
    pub id: u32,
    pub name: String,
    pub prs: u32,
    pub avatar: String,
    /// Absent on locally seeded entries
    #[serde(default)]
    #[allow(dead_code)]
    pub joined: Option<String>,
}

/// Participating project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[allow(dead_code)]
    pub id: u32,
    pub name: String,
    pub language: String,
    pub difficulty: String,
    pub issues: u32,
    pub description: String,
}

/// `/health` payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Health {
    #[allow(dead_code)]
    pub status: String,
    pub message: String,
    #[allow(dead_code)]
    pub timestamp: String,
    pub version: String,
}
