//! Application layer
//!
//! Contains use cases and service orchestration.

pub mod catalog_service;
pub mod stats_config;
pub mod stats_service;

pub use catalog_service::CatalogService;
pub use stats_service::{StatsRanges, StatsService};
