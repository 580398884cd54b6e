//! Shared constants for problem-api.

/// Content type for problem documents (RFC 9457).
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Plain JSON content type, accepted as an alternative to the problem media type.
pub const APPLICATION_JSON: &str = "application/json";

/// Content type of the line-oriented fallback rendering.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Base URI of the math problem types.
pub const MATH_PROBLEM_TYPE_BASE: &str = "https://example.com/probs/";

/// Title used for every math validation failure.
pub const MATH_PROBLEM_TITLE: &str = "Bad Request";

/// Extension key carrying the trace identifier.
pub const TRACE_ID_EXTENSION: &str = "traceId";

/// Extension key carrying the unhandled error chain in development.
pub const EXCEPTION_EXTENSION: &str = "exception";

/// Largest `n` accepted by the arbitrary precision factorial.
pub const MAX_RANGE_FACTORIAL: i32 = 100;

/// Default listening port of the server.
pub const DEFAULT_PORT: u16 = 5080;

/// Default bind address of the server.
pub const DEFAULT_HOST: &str = "127.0.0.1";
