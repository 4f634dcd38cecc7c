//! Stats service
//!
//! Generates mock aggregate counters. Generation is isolated in the pure
//! [`generate_snapshot`] so callers can pin the randomness with a seeded RNG.

use std::ops::RangeInclusive;

use rand::Rng;

use super::stats_config::{
    BADGES_MAX, BADGES_MIN, CONTRIBUTORS_MAX, CONTRIBUTORS_MIN, REPOSITORIES, TOTAL_PRS_MAX,
    TOTAL_PRS_MIN,
};
use crate::domain::entities::StatsSnapshot;
use crate::error::DomainError;

/// Inclusive bounds for each randomized counter. Every range is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRanges {
    total_prs: RangeInclusive<u32>,
    contributors: RangeInclusive<u32>,
    badges: RangeInclusive<u32>,
    repositories: u32,
}

impl StatsRanges {
    pub fn new(
        total_prs: RangeInclusive<u32>,
        contributors: RangeInclusive<u32>,
        badges: RangeInclusive<u32>,
        repositories: u32,
    ) -> Result<Self, DomainError> {
        check_range("totalPRs", &total_prs)?;
        check_range("contributors", &contributors)?;
        check_range("badges", &badges)?;

        Ok(Self {
            total_prs,
            contributors,
            badges,
            repositories,
        })
    }

    /// Bounds from `stats_config`
    pub fn standard() -> Result<Self, DomainError> {
        Self::new(
            TOTAL_PRS_MIN..=TOTAL_PRS_MAX,
            CONTRIBUTORS_MIN..=CONTRIBUTORS_MAX,
            BADGES_MIN..=BADGES_MAX,
            REPOSITORIES,
        )
    }

    pub fn total_prs(&self) -> &RangeInclusive<u32> {
        &self.total_prs
    }

    pub fn contributors(&self) -> &RangeInclusive<u32> {
        &self.contributors
    }

    pub fn badges(&self) -> &RangeInclusive<u32> {
        &self.badges
    }

    pub fn repositories(&self) -> u32 {
        self.repositories
    }
}

fn check_range(name: &str, range: &RangeInclusive<u32>) -> Result<(), DomainError> {
    if range.is_empty() {
        return Err(DomainError::Validation(format!(
            "{} range {}..={} is empty",
            name,
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

/// Draw one snapshot uniformly from `ranges`
pub fn generate_snapshot<R: Rng + ?Sized>(ranges: &StatsRanges, rng: &mut R) -> StatsSnapshot {
    StatsSnapshot {
        total_prs: rng.gen_range(ranges.total_prs().clone()),
        contributors: rng.gen_range(ranges.contributors().clone()),
        repositories: ranges.repositories(),
        badges: rng.gen_range(ranges.badges().clone()),
    }
}

/// Serves a freshly generated snapshot per call. Nothing is cached.
pub struct StatsService {
    ranges: StatsRanges,
}

impl StatsService {
    pub fn new(ranges: StatsRanges) -> Self {
        Self { ranges }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let snapshot = generate_snapshot(&self.ranges, &mut rand::thread_rng());
        tracing::debug!(
            total_prs = snapshot.total_prs,
            contributors = snapshot.contributors,
            badges = snapshot.badges,
            "Generated stats snapshot"
        );
        snapshot
    }
}
