//! Root message and the static endpoint listing.

use axum::Json;

use crate::response_types::{EndpointDoc, ParamDoc};

pub async fn view_endpoints() -> Json<&'static str> {
    Json("Please view GET /api/v1/endpoints for the list of math endpoints and example requests.")
}

pub async fn list_endpoints() -> Json<Vec<EndpointDoc>> {
    Json(endpoint_docs())
}

const fn query(name: &'static str, description: &'static str) -> ParamDoc {
    ParamDoc { name, source: "query", description }
}

/// Query-string endpoints; each has a path-parameter twin under `/api/v1/math`.
pub fn endpoint_docs() -> Vec<EndpointDoc> {
    vec![
        EndpointDoc {
            path: "/api/v1/divide",
            method: "GET",
            description: "Divide numerator by denominator",
            example: "/api/v1/divide?numerator=1&denominator=0",
            params: vec![query("numerator", "Dividend"), query("denominator", "Divisor, must not be zero")],
        },
        EndpointDoc {
            path: "/api/v1/squareroot",
            method: "GET",
            description: "Square root; a negative radicand is a bare 400 without math details",
            example: "/api/v1/squareroot?radicand=-1",
            params: vec![query("radicand", "Non-negative radicand")],
        },
        EndpointDoc {
            path: "/api/v1/complexsquareroot",
            method: "GET",
            description: "Square root answering negative values with an imaginary result",
            example: "/api/v1/complexsquareroot?value=-1",
            params: vec![query("value", "Any number")],
        },
        EndpointDoc {
            path: "/api/v1/logarithm",
            method: "GET",
            description: "Natural logarithm",
            example: "/api/v1/logarithm?value=0",
            params: vec![query("value", "Positive number")],
        },
        EndpointDoc {
            path: "/api/v1/factorialwithoverflow",
            method: "GET",
            description: "Factorial in 64-bit arithmetic, overflowing above 20",
            example: "/api/v1/factorialwithoverflow?n=21",
            params: vec![query("n", "Non-negative integer")],
        },
        EndpointDoc {
            path: "/api/v1/factorialrange",
            method: "GET",
            description: "Exact factorial as a decimal string",
            example: "/api/v1/factorialrange?n=101",
            params: vec![query("n", "Integer between 0 and 100")],
        },
        EndpointDoc {
            path: "/api/v1/inversecosine",
            method: "GET",
            description: "Inverse cosine in radians",
            example: "/api/v1/inversecosine?value=1.1",
            params: vec![query("value", "Number between -1 and 1")],
        },
        EndpointDoc {
            path: "/api/v1/throwex",
            method: "GET",
            description: "Always fails with an unhandled error",
            example: "/api/v1/throwex",
            params: vec![],
        },
    ]
}
