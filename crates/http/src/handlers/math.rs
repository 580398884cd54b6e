//! Query-string math endpoints under `/api/v1`.
//!
//! Domain failures attach a math error context carrying the request instance
//! and return an empty 400; the finalizer writes the problem document.

use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use problem_api_core::{
    CoreError, MathErrorContext, MathErrorKind, SquareRoot, divide, factorial_checked,
    factorial_exact, inverse_cosine, logarithm, square_root,
};

use super::RequestInstance;
use crate::api_error::ApiError;
use crate::fault::HandlerFault;
use crate::query_types::{DivideQuery, FactorialQuery, RadicandQuery, ValueQuery};

pub async fn get_divide(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<DivideQuery>, QueryRejection>,
) -> Result<Json<f64>, ApiError> {
    let Query(q) = query?;
    divide(q.numerator, q.denominator)
        .map(Json)
        .map_err(|kind| ApiError::math(kind, Some(instance)))
}

/// Answers a negative radicand with a bare 400 and no math context.
pub async fn get_square_root(
    query: Result<Query<RadicandQuery>, QueryRejection>,
) -> Result<Json<f64>, ApiError> {
    let Query(q) = query?;
    square_root(q.radicand).map(Json).map_err(|_| ApiError::Status(StatusCode::BAD_REQUEST))
}

/// Negative values succeed with an imaginary result. The attached context is
/// discarded because the body is already written.
pub async fn get_complex_square_root(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(q) = query?;
    let root = SquareRoot::of(q.value);
    let response = Json(root.to_string()).into_response();
    Ok(match root {
        SquareRoot::Imaginary(_) => HandlerFault::Math(
            MathErrorContext::new(MathErrorKind::ComplexNumberResult).with_instance(instance),
        )
        .attach(response),
        SquareRoot::Real(_) => response,
    })
}

pub async fn get_logarithm(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> Result<Json<f64>, ApiError> {
    let Query(q) = query?;
    logarithm(q.value).map(Json).map_err(|kind| ApiError::math(kind, Some(instance)))
}

pub async fn get_factorial_with_overflow(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<FactorialQuery>, QueryRejection>,
) -> Result<Json<i64>, ApiError> {
    let Query(q) = query?;
    match factorial_checked(q.n) {
        Ok(result) => Ok(Json(result)),
        Err(CoreError::Math(kind)) => Err(ApiError::math(kind, Some(instance))),
        Err(other) => Err(anyhow::Error::new(other).into()),
    }
}

pub async fn get_factorial(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<FactorialQuery>, QueryRejection>,
) -> Result<Json<String>, ApiError> {
    let Query(q) = query?;
    factorial_exact(q.n).map(Json).map_err(|kind| ApiError::math(kind, Some(instance)))
}

pub async fn get_inverse_cosine(
    RequestInstance(instance): RequestInstance,
    query: Result<Query<ValueQuery>, QueryRejection>,
) -> Result<Json<f64>, ApiError> {
    let Query(q) = query?;
    inverse_cosine(q.value).map(Json).map_err(|kind| ApiError::math(kind, Some(instance)))
}

pub async fn throw_exception() -> Result<Json<String>, ApiError> {
    Err(anyhow::anyhow!("Sample Exception").into())
}
