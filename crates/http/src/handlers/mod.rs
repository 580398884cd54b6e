#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod controller;
pub mod index;
pub mod math;

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OriginalUri};
use axum::http::request::Parts;

/// `METHOD /path?query` of the current request, used as problem `instance`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInstance(pub String);

impl<S: Send + Sync> FromRequestParts<S> for RequestInstance {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts.extensions.get::<OriginalUri>().map_or(&parts.uri, |original| &original.0);
        let target = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
        Ok(Self(format!("{} {target}", parts.method)))
    }
}
