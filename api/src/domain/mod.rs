//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for stats, contributors and projects
//! - `ports`: Trait definitions for the data the API serves

pub mod entities;
pub mod ports;
