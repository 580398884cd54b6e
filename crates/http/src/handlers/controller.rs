//! Path-parameter math endpoints under `/api/v1/math`.
//!
//! Same operations as [`super::math`], but the attached math error context
//! has no instance. Also hosts the two endpoints that write their own 400
//! body.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{OriginalUri, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use problem_api_core::{
    MATH_PROBLEM_TITLE, MathErrorContext, MathErrorKind, ProblemDocument, SquareRoot,
    TRACE_ID_EXTENSION, apply_defaults, divide, factorial_checked, factorial_exact,
    inverse_cosine, logarithm, square_root,
};

use crate::api_error::ApiError;
use crate::fault::HandlerFault;
use crate::trace::resolve_trace_id;
use crate::writer::ProblemJson;

pub async fn divide_path(
    path: Result<Path<(f64, f64)>, PathRejection>,
) -> Result<Json<f64>, ApiError> {
    let Path((numerator, denominator)) = path?;
    Ok(Json(divide(numerator, denominator)?))
}

pub async fn square_root_path(
    path: Result<Path<f64>, PathRejection>,
) -> Result<Json<f64>, ApiError> {
    let Path(radicand) = path?;
    square_root(radicand).map(Json).map_err(|_| ApiError::Status(StatusCode::BAD_REQUEST))
}

pub async fn complex_square_root_path(
    path: Result<Path<f64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(radicand) = path?;
    let root = SquareRoot::of(radicand);
    let response = Json(root.to_string()).into_response();
    Ok(match root {
        SquareRoot::Imaginary(_) => {
            HandlerFault::Math(MathErrorContext::new(MathErrorKind::ComplexNumberResult))
                .attach(response)
        },
        SquareRoot::Real(_) => response,
    })
}

pub async fn logarithm_path(path: Result<Path<f64>, PathRejection>) -> Result<Json<f64>, ApiError> {
    let Path(value) = path?;
    Ok(Json(logarithm(value)?))
}

pub async fn factorial_with_overflow_path(
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<i64>, ApiError> {
    let Path(n) = path?;
    Ok(Json(factorial_checked(n)?))
}

pub async fn factorial_path(path: Result<Path<i32>, PathRejection>) -> Result<Json<String>, ApiError> {
    let Path(n) = path?;
    Ok(Json(factorial_exact(n)?))
}

pub async fn inverse_cosine_path(
    path: Result<Path<f64>, PathRejection>,
) -> Result<Json<f64>, ApiError> {
    let Path(value) = path?;
    Ok(Json(inverse_cosine(value)?))
}

pub async fn throw_exception_path() -> Result<Json<String>, ApiError> {
    Err(anyhow::anyhow!("Sample Exception").into())
}

/// Writes its own 400 body, so the attached division-by-zero context never
/// reaches the finalizer and the client sees the generic 400 problem.
pub async fn defective_response(
    headers: HeaderMap,
    path: Result<Path<(f64, f64)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((numerator, denominator)) = path?;
    match divide(numerator, denominator) {
        Ok(result) => Ok(Json(result).into_response()),
        Err(kind) => {
            let mut doc = ProblemDocument::new().with_status(StatusCode::BAD_REQUEST.as_u16());
            if let Some(trace_id) = resolve_trace_id(&headers) {
                doc = doc.with_extension(TRACE_ID_EXTENSION, trace_id);
            }
            apply_defaults(&mut doc, None);
            Ok(HandlerFault::Math(MathErrorContext::new(kind)).attach(ProblemJson(doc).into_response()))
        },
    }
}

/// Builds the division-by-zero problem itself instead of relying on the finalizer.
pub async fn workaround_response(
    OriginalUri(uri): OriginalUri,
    path: Result<Path<(f64, f64)>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path((numerator, denominator)) = path?;
    match divide(numerator, denominator) {
        Ok(result) => Ok(Json(result).into_response()),
        Err(kind) => Ok(ProblemJson(
            ProblemDocument::new()
                .with_type(kind.type_uri())
                .with_title(MATH_PROBLEM_TITLE)
                .with_status(StatusCode::BAD_REQUEST.as_u16())
                .with_detail(kind.to_string())
                .with_instance(uri.path()),
        )
        .into_response()),
    }
}
