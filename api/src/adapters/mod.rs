//! Adapters
//!
//! Implementations of the domain ports.

pub mod static_catalog;

pub use static_catalog::StaticCatalog;
