//! Response middleware
//!
//! Turns handler failures into the `{error, message}` 500 contract.

pub mod error_details;
pub mod panic;

pub use error_details::expose_error_details;
pub use panic::panic_response;
