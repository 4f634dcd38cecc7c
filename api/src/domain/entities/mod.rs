//! Domain entities
//!
//! Pure domain models. HTTP response shapes live next to the handlers.

pub mod contributor;
pub mod project;
pub mod stats;

pub use contributor::{Contributor, ContributorId};
pub use project::{Difficulty, Project, ProjectId};
pub use stats::StatsSnapshot;
