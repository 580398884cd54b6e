//! Response finalization: turns empty error responses into problem documents.
//!
//! Runs once per request after the handler. Responses that are not 4xx/5xx,
//! or whose body has already been produced, pass through untouched.

use std::sync::Arc;

use axum::body::{Body, HttpBody as _};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::http::header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE};
use axum::middleware::Next;
use axum::response::Response;
use problem_api_core::{
    EXCEPTION_EXTENSION, Environment, FinalizeOptions, ProblemDocument, TRACE_ID_EXTENSION,
    apply_defaults,
};

use crate::AppState;
use crate::fault::HandlerFault;
use crate::trace::resolve_trace_id;
use crate::writer::ProblemWriter;

pub async fn finalize_problem(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let accept = accept_header(request.headers());
    let trace_id = resolve_trace_id(request.headers());

    let mut response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }
    if has_started(&response) {
        tracing::debug!(status = status.as_u16(), "response body already written, skipping problem details");
        return response;
    }

    let fault = response.extensions_mut().remove::<HandlerFault>();
    let doc = build_problem(status, trace_id, fault, state.options, state.environment);
    let rendered = ProblemWriter::new(state.options.writer).write(&doc, accept.as_deref());

    let (mut parts, _) = response.into_parts();
    parts.headers.insert(CONTENT_TYPE, rendered.content_type);
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::from(rendered.body))
}

/// All `Accept` field lines joined into one list.
///
/// Values are decoded lossily so that one undecodable segment does not hide
/// the well-formed ones. `None` when the header is absent.
pub fn accept_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<_> =
        headers.get_all(ACCEPT).iter().map(|v| String::from_utf8_lossy(v.as_bytes())).collect();
    (!values.is_empty()).then(|| values.join(", "))
}

/// A body that is not known to be empty counts as already written.
fn has_started(response: &Response) -> bool {
    response.body().size_hint().exact() != Some(0)
}

/// Assemble and default the problem document for an error response.
pub fn build_problem(
    status: StatusCode,
    trace_id: Option<String>,
    fault: Option<HandlerFault>,
    options: FinalizeOptions,
    environment: Environment,
) -> ProblemDocument {
    let mut doc = ProblemDocument::new().with_status(status.as_u16());
    if let Some(trace_id) = trace_id {
        doc = doc.with_extension(TRACE_ID_EXTENSION, trace_id);
    }

    match fault {
        Some(HandlerFault::Math(context)) => context.apply_to(&mut doc, options.include_instance),
        Some(HandlerFault::InvalidRequest(errors)) => doc.errors = Some(errors),
        Some(HandlerFault::Unhandled { message, chain }) => {
            doc.detail = Some(message);
            if environment.is_development() {
                doc = doc.with_extension(EXCEPTION_EXTENSION, chain);
            }
        },
        None => {},
    }

    apply_defaults(&mut doc, Some(status.as_u16()));
    doc
}
