//! Converts handler panics into unhandled-error responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::Response;

use crate::fault::HandlerFault;

/// Response hook for `tower_http::catch_panic::CatchPanicLayer`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "handler panicked".to_owned()
    };
    tracing::error!(panic = %message, "handler panicked");
    let chain = format!("panic: {message}");
    HandlerFault::Unhandled { message, chain }.into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
