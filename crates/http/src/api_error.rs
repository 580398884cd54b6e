//! Typed API error for HTTP handlers.
//!
//! Handlers return `Result<Json<T>, ApiError>`. Every variant turns into an
//! empty-bodied error response so that the finalizer can write the problem
//! document; the body is never produced here.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use problem_api_core::{CoreError, MathErrorContext, MathErrorKind, ValidationErrors};

use crate::fault::HandlerFault;

#[derive(Debug)]
pub enum ApiError {
    /// 400 with a math error context.
    Math(MathErrorContext),
    /// 400 validation problem for unbindable parameters.
    InvalidRequest { source: &'static str, message: String },
    /// Bare status without any context.
    Status(StatusCode),
    /// 500: unexpected failure. Logged with its full chain.
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn math(kind: MathErrorKind, instance: Option<String>) -> Self {
        let context = MathErrorContext::new(kind);
        Self::Math(match instance {
            Some(instance) => context.with_instance(instance),
            None => context,
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Math(context) => {
                tracing::debug!(math_error = %context, "math validation failed");
                HandlerFault::Math(context).into_response_with(StatusCode::BAD_REQUEST)
            },
            Self::InvalidRequest { source, message } => {
                tracing::debug!(source, %message, "request binding failed");
                let mut errors = ValidationErrors::new();
                errors.insert(source.to_owned(), vec![message]);
                HandlerFault::InvalidRequest(errors).into_response_with(StatusCode::BAD_REQUEST)
            },
            Self::Status(status) => status.into_response(),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "unhandled error");
                HandlerFault::Unhandled { message: err.to_string(), chain: format!("{err:?}") }
                    .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
            },
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<MathErrorKind> for ApiError {
    fn from(kind: MathErrorKind) -> Self {
        Self::math(kind, None)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Math(kind) => Self::math(kind, None),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidRequest { source: "query", message: rejection.body_text() }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest { source: "path", message: rejection.body_text() }
    }
}
