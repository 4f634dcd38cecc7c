//! Stats generation bounds
//!
//! Inclusive ranges the mock counters are drawn from.

/// Smallest total pull request count
pub const TOTAL_PRS_MIN: u32 = 50;

/// Largest total pull request count
pub const TOTAL_PRS_MAX: u32 = 149;

/// Smallest contributor count
pub const CONTRIBUTORS_MIN: u32 = 20;

/// Largest contributor count
pub const CONTRIBUTORS_MAX: u32 = 69;

/// Smallest badge count
pub const BADGES_MIN: u32 = 25;

/// Largest badge count
pub const BADGES_MAX: u32 = 54;

/// Participating repositories (one per catalog project)
pub const REPOSITORIES: u32 = 3;
