//! Panic recovery

use std::any::Any;

use axum::response::Response;

use crate::error::internal_error_response;

/// Response for `CatchPanicLayer`: a 500 carrying the panic message as detail
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    internal_error_response(detail)
}
