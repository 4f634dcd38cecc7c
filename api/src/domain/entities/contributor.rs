//! Contributor domain entity
//!
//! A participant record used for leaderboard ranking.

use chrono::NaiveDate;

/// Unique identifier for a contributor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContributorId(pub u32);

impl std::fmt::Display for ContributorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contributor entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contributor {
    pub id: ContributorId,
    pub name: String,
    /// Number of pull requests opened during the event
    pub pr_count: u32,
    /// Emoji avatar
    pub avatar: String,
    pub joined_date: NaiveDate,
}
