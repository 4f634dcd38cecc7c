//! Stats snapshot entity

/// Point-in-time aggregate counters.
///
/// Snapshots have no identity and are never stored; a fresh one is
/// generated for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub total_prs: u32,
    pub contributors: u32,
    pub repositories: u32,
    pub badges: u32,
}
