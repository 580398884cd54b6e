//! Request tracing: the per-request span and the `traceId` problem extension.

use std::time::Duration;

use axum::http::{HeaderMap, Request, Response};
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnRequest, MakeSpan, OnResponse, TraceLayer};
use tracing::Span;
use tracing::field::Empty;

pub const TRACEPARENT: &str = "traceparent";
pub const X_REQUEST_ID: &str = "x-request-id";

/// Trace identifier for problem documents.
///
/// A well-formed W3C `traceparent` wins; otherwise the request id set by the
/// request-id layer is used as correlation id.
pub fn resolve_trace_id(headers: &HeaderMap) -> Option<String> {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    header(TRACEPARENT)
        .filter(|v| is_valid_traceparent(v))
        .or_else(|| header(X_REQUEST_ID).filter(|v| !v.is_empty()))
        .map(str::to_owned)
}

/// `version-traceid-parentid-flags` with lowercase hex and non-zero ids.
pub fn is_valid_traceparent(value: &str) -> bool {
    let parts: Vec<&str> = value.trim().split('-').collect();
    let [version, trace_id, parent_id, flags] = parts.as_slice() else {
        return false;
    };
    let hex = |s: &str, len: usize| {
        s.len() == len && s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    };
    let non_zero = |s: &str| s.bytes().any(|b| b != b'0');
    hex(version, 2)
        && *version != "ff"
        && hex(trace_id, 32)
        && non_zero(trace_id)
        && hex(parent_id, 16)
        && non_zero(parent_id)
        && hex(flags, 2)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, req: &Request<B>) -> Span {
        let request_id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("n/a");
        tracing::info_span!(
            "http_request",
            method = %req.method(),
            uri = %req.uri().path(),
            request_id = %request_id,
            status = Empty,
            latency_ms = Empty,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStatus;

impl<B> OnResponse<B> for RecordStatus {
    fn on_response(self, res: &Response<B>, latency: Duration, span: &Span) {
        span.record("status", res.status().as_u16());
        span.record("latency_ms", latency.as_millis());
        tracing::debug!(parent: span, "finished processing request");
    }
}

pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan, DefaultOnRequest, RecordStatus>;

pub fn trace_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http().make_span_with(RequestSpan).on_response(RecordStatus)
}
