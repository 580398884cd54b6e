//! HTTP API server for problem-api.
//!
//! A handful of math endpoints whose error responses are finalized into RFC
//! 9457 problem documents, negotiated against the `Accept` header.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
pub mod fault;
pub mod finalize;
mod handlers;
pub mod panic;
mod query_types;
mod response_types;
pub mod trace;
pub mod writer;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use problem_api_core::{ApiVariant, Environment, FinalizeOptions};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

pub use handlers::RequestInstance;
pub use response_types::{EndpointDoc, ParamDoc, VersionResponse};

/// Shared application state for all HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Which finalization flavour this server runs
    pub variant: ApiVariant,
    /// Finalization knobs derived from `variant`
    pub options: FinalizeOptions,
    /// Hosting environment; controls exposure of error internals
    pub environment: Environment,
}

impl AppState {
    pub fn new(variant: ApiVariant, environment: Environment) -> Self {
        Self { variant, options: variant.options(), environment }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index::view_endpoints))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/v1/endpoints", get(handlers::index::list_endpoints))
        .route("/api/v1/divide", get(handlers::math::get_divide))
        .route("/api/v1/squareroot", get(handlers::math::get_square_root))
        .route("/api/v1/complexsquareroot", get(handlers::math::get_complex_square_root))
        .route("/api/v1/logarithm", get(handlers::math::get_logarithm))
        .route("/api/v1/factorialwithoverflow", get(handlers::math::get_factorial_with_overflow))
        .route("/api/v1/factorialrange", get(handlers::math::get_factorial))
        .route("/api/v1/inversecosine", get(handlers::math::get_inverse_cosine))
        .route("/api/v1/throwex", get(handlers::math::throw_exception))
        .route("/api/v1/math/divide/{numerator}/{denominator}", get(handlers::controller::divide_path))
        .route("/api/v1/math/squareroot/{radicand}", get(handlers::controller::square_root_path))
        .route(
            "/api/v1/math/complexsquareroot/{radicand}",
            get(handlers::controller::complex_square_root_path),
        )
        .route("/api/v1/math/logarithm/{value}", get(handlers::controller::logarithm_path))
        .route(
            "/api/v1/math/factorialwithoverflow/{n}",
            get(handlers::controller::factorial_with_overflow_path),
        )
        .route("/api/v1/math/factorial/{n}", get(handlers::controller::factorial_path))
        .route("/api/v1/math/inversecosine/{value}", get(handlers::controller::inverse_cosine_path))
        .route("/api/v1/math/throwex", get(handlers::controller::throw_exception_path))
        .route(
            "/api/v1/math/defectiveresponse/{numerator}/{denominator}",
            get(handlers::controller::defective_response),
        )
        .route(
            "/api/v1/math/workaroundresponse/{numerator}/{denominator}",
            get(handlers::controller::workaround_response),
        )
        .fallback(not_found)
        .with_state(Arc::clone(&state));

    with_problem_layers(routes, state)
}

/// Wrap `router` in the problem details stack.
///
/// Outermost first: set request id, propagate request id, trace, finalize
/// problem, catch panic, then the routes.
pub fn with_problem_layers(router: Router, state: Arc<AppState>) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic::handle_panic))
        .layer(from_fn_with_state(state, finalize::finalize_problem))
        .layer(trace::trace_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn health() -> &'static str {
    "ok"
}

async fn version(State(state): State<Arc<AppState>>) -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION"), variant: state.variant.as_str() })
}
