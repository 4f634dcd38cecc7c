//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contributors;
pub mod fallback;
pub mod health;
pub mod projects;
pub mod stats;

pub use contributors::list_contributors;
pub use fallback::not_found;
pub use health::health;
pub use projects::list_projects;
pub use stats::get_stats;
