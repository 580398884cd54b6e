//! Writing a resolved problem document as JSON or plain text.

use axum::Json;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use problem_api_core::{
    APPLICATION_PROBLEM_JSON, ProblemDocument, TEXT_PLAIN, WriterMode, can_write_json_problem,
    render_plain_text,
};

/// Body and content type chosen for a problem document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProblem {
    pub content_type: HeaderValue,
    pub body: Vec<u8>,
}

impl RenderedProblem {
    fn json(body: Vec<u8>) -> Self {
        Self { content_type: HeaderValue::from_static(APPLICATION_PROBLEM_JSON), body }
    }

    fn plain(body: String) -> Self {
        Self { content_type: HeaderValue::from_static(TEXT_PLAIN), body: body.into_bytes() }
    }

    pub fn is_json(&self) -> bool {
        self.content_type.as_bytes() == APPLICATION_PROBLEM_JSON.as_bytes()
    }
}

/// Structured writer with a guaranteed plain-text fallback.
#[derive(Debug, Clone, Copy)]
pub struct ProblemWriter {
    mode: WriterMode,
}

impl ProblemWriter {
    pub const fn new(mode: WriterMode) -> Self {
        Self { mode }
    }

    pub fn can_write(&self, accept: Option<&str>) -> bool {
        match self.mode {
            WriterMode::Always => true,
            WriterMode::Negotiated => can_write_json_problem(accept),
        }
    }

    /// Never fails: anything the JSON path cannot handle is rendered as text.
    pub fn write(&self, doc: &ProblemDocument, accept: Option<&str>) -> RenderedProblem {
        if !self.can_write(accept) {
            tracing::debug!(accept, "JSON problem details not acceptable, writing plain text");
            return RenderedProblem::plain(render_plain_text(doc));
        }
        match serde_json::to_vec(doc) {
            Ok(body) => RenderedProblem::json(body),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize problem document, writing plain text");
                RenderedProblem::plain(render_plain_text(doc))
            },
        }
    }
}

/// A problem document written directly by a handler, bypassing the finalizer.
#[derive(Debug, Clone)]
pub struct ProblemJson(pub ProblemDocument);

impl IntoResponse for ProblemJson {
    fn into_response(self) -> Response {
        let status = self
            .0
            .status
            .and_then(|s| StatusCode::from_u16(s).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self.0)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON));
        response
    }
}
