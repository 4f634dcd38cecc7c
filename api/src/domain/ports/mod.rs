//! Port traits
//!
//! Interfaces the application layer depends on.
//! Implementations are provided by adapters.

pub mod catalog;

pub use catalog::CatalogRepository;
