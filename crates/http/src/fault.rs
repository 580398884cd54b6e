//! Per-request error outcome handed from handlers to the problem finalizer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use problem_api_core::{MathErrorContext, ValidationErrors};

/// Why a handler produced an error status.
///
/// Travels in the response extensions and is removed exactly once by
/// [`crate::finalize::finalize_problem`]. Dropped with the response when the
/// finalizer does not run.
#[derive(Debug, Clone)]
pub enum HandlerFault {
    /// Expected domain validation failure.
    Math(MathErrorContext),
    /// Query or path parameters could not be bound.
    InvalidRequest(ValidationErrors),
    /// Unexpected error or panic. `chain` is only exposed in development.
    Unhandled { message: String, chain: String },
}

impl HandlerFault {
    /// Empty-bodied response with `status`, carrying this fault.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        let mut response = status.into_response();
        response.extensions_mut().insert(self);
        response
    }

    /// Attach this fault to an already built response.
    pub fn attach(self, mut response: Response) -> Response {
        response.extensions_mut().insert(self);
        response
    }
}
