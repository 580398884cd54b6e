#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end behaviour of the problem details finalizer through the router.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, Request, StatusCode};
use axum::response::Response;
use axum::routing::get;
use problem_api_core::{ApiVariant, Environment};
use problem_api_http::{AppState, create_router, with_problem_layers};
use serde_json::Value;
use tower::ServiceExt;

const TRACEPARENT: &str = "00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01";

fn app(variant: ApiVariant) -> Router {
    create_router(Arc::new(AppState::new(variant, Environment::Production)))
}

async fn send(app: Router, method: Method, uri: &str, accept: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(accept) = accept {
        builder = builder.header(ACCEPT, accept);
    }
    app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

async fn get_uri(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

fn content_type(response: &Response) -> &str {
    response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).unwrap_or_default()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

#[tokio::test]
async fn divide_by_zero_is_a_math_problem() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/divide?numerator=1&denominator=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), "application/problem+json");

    let request_id = response.headers()["x-request-id"].to_str().unwrap().to_owned();
    let body = body_json(response).await;
    assert!(body["type"].as_str().unwrap().ends_with("division-by-zero"));
    assert_eq!(body["title"], "Bad Request");
    assert_eq!(body["status"], 400);
    assert_eq!(body["detail"], "Division by zero is not allowed.");
    assert_eq!(body["instance"], "GET /api/v1/divide?numerator=1&denominator=0");
    assert_eq!(body["traceId"], request_id.as_str());
}

#[tokio::test]
async fn successful_division_is_untouched() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/divide?numerator=1&denominator=4").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    assert_eq!(body_text(response).await, "0.25");
}

#[tokio::test]
async fn service_variant_omits_instance() {
    let response = get_uri(app(ApiVariant::Service), "/api/v1/logarithm?value=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["type"], "https://example.com/probs/invalid-logarithm");
    assert!(body.get("instance").is_none());
}

#[tokio::test]
async fn out_of_range_factorial() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/factorialrange?n=101").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["type"].as_str().unwrap().ends_with("out-of-range-factorial"));

    let response = get_uri(app(ApiVariant::Writer), "/api/v1/factorialrange?n=5").await;
    assert_eq!(body_json(response).await, "120");
}

#[tokio::test]
async fn factorial_overflow_and_negative_input() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/factorialwithoverflow?n=21").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["type"], "https://example.com/probs/overflow");

    let response = get_uri(app(ApiVariant::Writer), "/api/v1/factorialwithoverflow?n=-1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["detail"],
        "Factorial is not defined for negative numbers."
    );
}

#[tokio::test]
async fn html_clients_get_plain_text() {
    let response = send(
        app(ApiVariant::Writer),
        Method::GET,
        "/api/v1/inversecosine?value=1.1",
        Some("text/html"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(content_type(&response).starts_with("text/plain"));

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "type: https://example.com/probs/invalid-trigonometric-argument");
    assert_eq!(lines[1], "title: Bad Request");
    assert_eq!(lines[2], "status: 400");
    assert_eq!(lines[3], "detail: The value must be between -1 and 1 for the inverse cosine operation.");
    assert_eq!(lines[4], "instance: GET /api/v1/inversecosine?value=1.1");
    assert!(lines[5].starts_with("traceId: "));
    assert!(serde_json::from_str::<Value>(&text).is_err());
}

#[tokio::test]
async fn problem_variant_ignores_accept() {
    let response = send(
        app(ApiVariant::Problem),
        Method::GET,
        "/api/v1/divide?numerator=1&denominator=0",
        Some("text/html"),
    )
    .await;
    assert_eq!(content_type(&response), "application/problem+json");
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Division by zero is not allowed.");
    assert!(body.get("instance").is_none());
}

#[tokio::test]
async fn wildcard_accept_gets_json() {
    for accept in ["*/*", "application/*", "application/json", "text/html, application/problem+json;q=0.1"] {
        let response = send(app(ApiVariant::Writer), Method::GET, "/api/v1/throwex", Some(accept)).await;
        assert_eq!(content_type(&response), "application/problem+json", "{accept}");
    }
}

#[tokio::test]
async fn throwex_is_an_internal_error() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/throwex").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Sample Exception");
    assert_eq!(body["title"], "An error occurred while processing your request.");
    assert_eq!(body["type"], "https://tools.ietf.org/html/rfc9110#section-15.6.1");
    assert!(body.get("exception").is_none());
}

#[tokio::test]
async fn throwex_plain_text_keeps_detail() {
    let response =
        send(app(ApiVariant::Service), Method::GET, "/api/v1/throwex", Some("text/plain")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.contains("detail: Sample Exception\n"));
}

#[tokio::test]
async fn development_exposes_error_chain() {
    let app = create_router(Arc::new(AppState::new(ApiVariant::Writer, Environment::Development)));
    let body = body_json(get_uri(app, "/api/v1/throwex").await).await;
    assert!(body["exception"].as_str().unwrap().contains("Sample Exception"));
}

#[tokio::test]
async fn square_root_has_no_math_context() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/squareroot?radicand=-1").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["type"], "https://tools.ietf.org/html/rfc9110#section-15.5.1");
    assert_eq!(body["title"], "Bad Request");
    assert!(body.get("detail").is_none());
    assert!(body.get("instance").is_none());
}

#[tokio::test]
async fn complex_square_root_succeeds() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/complexsquareroot?value=-4").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, "2i");
}

#[tokio::test]
async fn unbindable_query_is_a_validation_problem() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/divide?numerator=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["title"], "Bad Request");
    assert!(body["errors"]["query"][0].as_str().is_some());
}

#[tokio::test]
async fn unknown_route_and_wrong_method() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["title"], "Not Found");

    let response = send(app(ApiVariant::Writer), Method::POST, "/api/v1/divide", None).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["title"], "Method Not Allowed");
}

#[tokio::test]
async fn traceparent_becomes_trace_id() {
    let request = Request::builder()
        .uri("/api/v1/logarithm?value=-3")
        .header("traceparent", TRACEPARENT)
        .body(Body::empty())
        .unwrap();
    let response = app(ApiVariant::Writer).oneshot(request).await.unwrap();
    assert_eq!(body_json(response).await["traceId"], TRACEPARENT);
}

#[tokio::test]
async fn controller_routes_attach_context_without_instance() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/math/divide/1/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["type"], "https://example.com/probs/division-by-zero");
    assert!(body.get("instance").is_none());

    let response = get_uri(app(ApiVariant::Writer), "/api/v1/math/factorial/7").await;
    assert_eq!(body_json(response).await, "5040");
}

#[tokio::test]
async fn defective_response_loses_math_context() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/math/defectiveresponse/1/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["type"], "https://tools.ietf.org/html/rfc9110#section-15.5.1");
    assert!(body.get("detail").is_none());
}

#[tokio::test]
async fn defective_response_carries_trace_id() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/math/defectiveresponse/1/0").await;
    let request_id = response.headers()["x-request-id"].to_str().unwrap().to_owned();
    assert_eq!(body_json(response).await["traceId"], request_id.as_str());
}

#[tokio::test]
async fn workaround_response_writes_its_own_problem() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/math/workaroundresponse/1/0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), "application/problem+json");
    let body = body_json(response).await;
    assert_eq!(body["detail"], "Division by zero is not allowed.");
    assert_eq!(body["instance"], "/api/v1/math/workaroundresponse/1/0");
}

#[tokio::test]
async fn panics_become_internal_errors() {
    async fn boom() -> &'static str {
        panic!("kaboom")
    }
    let state = Arc::new(AppState::new(ApiVariant::Writer, Environment::Production));
    let app = with_problem_layers(Router::new().route("/boom", get(boom)), state);

    let response = get_uri(app, "/boom").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["detail"], "kaboom");
}

#[tokio::test]
async fn endpoint_listing_and_version() {
    let response = get_uri(app(ApiVariant::Writer), "/api/v1/endpoints").await;
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 8);

    let response = get_uri(app(ApiVariant::Service), "/api/version").await;
    assert_eq!(body_json(response).await["variant"], "service");
}

#[tokio::test]
async fn repeated_accept_lines_are_negotiated_together() {
    let request = Request::get("/api/v1/divide?numerator=1&denominator=0")
        .header(ACCEPT, "text/html")
        .header(ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = app(ApiVariant::Writer).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(content_type(&response), "application/problem+json");
}

#[tokio::test]
async fn undecodable_accept_segment_does_not_widen_negotiation() {
    let request = Request::get("/api/v1/divide?numerator=1&denominator=0")
        .header(ACCEPT, HeaderValue::from_bytes(b"text/html, text/x-\xe9").unwrap())
        .body(Body::empty())
        .unwrap();
    let response = app(ApiVariant::Writer).oneshot(request).await.unwrap();
    assert_eq!(content_type(&response), "text/plain; charset=utf-8");
    assert!(body_text(response).await.contains("detail: Division by zero is not allowed."));
}
