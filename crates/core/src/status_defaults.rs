//! Status code defaults for problem documents.
//!
//! The table mirrors the RFC 9110 / RFC 4918 section references used by
//! mainstream problem details implementations. Statuses outside the table get
//! the standard reason phrase as title and no type.

use http::StatusCode;

use crate::{CoreError, ProblemDocument, Result};

/// `type` URI and `title` for a tabled status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDefault {
    pub status: u16,
    pub type_uri: &'static str,
    pub title: &'static str,
}

const fn entry(status: u16, type_uri: &'static str, title: &'static str) -> StatusDefault {
    StatusDefault { status, type_uri, title }
}

/// Immutable, process-wide defaults table. Sorted by status.
pub static STATUS_DEFAULTS: [StatusDefault; 16] = [
    entry(400, "https://tools.ietf.org/html/rfc9110#section-15.5.1", "Bad Request"),
    entry(401, "https://tools.ietf.org/html/rfc9110#section-15.5.2", "Unauthorized"),
    entry(403, "https://tools.ietf.org/html/rfc9110#section-15.5.4", "Forbidden"),
    entry(404, "https://tools.ietf.org/html/rfc9110#section-15.5.5", "Not Found"),
    entry(405, "https://tools.ietf.org/html/rfc9110#section-15.5.6", "Method Not Allowed"),
    entry(406, "https://tools.ietf.org/html/rfc9110#section-15.5.7", "Not Acceptable"),
    entry(408, "https://tools.ietf.org/html/rfc9110#section-15.5.9", "Request Timeout"),
    entry(409, "https://tools.ietf.org/html/rfc9110#section-15.5.10", "Conflict"),
    entry(412, "https://tools.ietf.org/html/rfc9110#section-15.5.13", "Precondition Failed"),
    entry(415, "https://tools.ietf.org/html/rfc9110#section-15.5.16", "Unsupported Media Type"),
    entry(422, "https://tools.ietf.org/html/rfc4918#section-11.2", "Unprocessable Entity"),
    entry(426, "https://tools.ietf.org/html/rfc9110#section-15.5.22", "Upgrade Required"),
    entry(
        500,
        "https://tools.ietf.org/html/rfc9110#section-15.6.1",
        "An error occurred while processing your request.",
    ),
    entry(502, "https://tools.ietf.org/html/rfc9110#section-15.6.3", "Bad Gateway"),
    entry(503, "https://tools.ietf.org/html/rfc9110#section-15.6.4", "Service Unavailable"),
    entry(504, "https://tools.ietf.org/html/rfc9110#section-15.6.5", "Gateway Timeout"),
];

/// Look up the tabled defaults for `status`.
pub fn status_default(status: u16) -> Option<&'static StatusDefault> {
    STATUS_DEFAULTS
        .binary_search_by_key(&status, |d| d.status)
        .ok()
        .and_then(|idx| STATUS_DEFAULTS.get(idx))
}

/// Standard HTTP reason phrase, if the status code has one.
pub fn reason_phrase(status: u16) -> Option<&'static str> {
    StatusCode::from_u16(status).ok().and_then(|code| code.canonical_reason())
}

/// Resolve the status of `doc` and back-fill `title` and `type`.
///
/// An unset status becomes `fallback_status`, else 400 for the validation
/// variant, else 500. Explicitly set `title`/`type` are never overwritten.
pub fn apply_defaults(doc: &mut ProblemDocument, fallback_status: Option<u16>) {
    let implied = if doc.is_validation() { 400 } else { 500 };
    let status = *doc.status.get_or_insert(fallback_status.unwrap_or(implied));

    if let Some(defaults) = status_default(status) {
        doc.title.get_or_insert_with(|| defaults.title.to_owned());
        doc.type_uri.get_or_insert_with(|| defaults.type_uri.to_owned());
    } else if doc.title.is_none() {
        doc.title = reason_phrase(status).map(str::to_owned);
    }
}

/// The defaulted problem document for a bare `status`.
pub fn problem_for_status(status: u16) -> Result<ProblemDocument> {
    StatusCode::from_u16(status).map_err(|_| CoreError::InvalidStatus(status))?;
    let mut doc = ProblemDocument::new().with_status(status);
    apply_defaults(&mut doc, None);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationErrors;

    #[test]
    fn test_table_is_sorted() {
        assert!(STATUS_DEFAULTS.windows(2).all(|w| w[0].status < w[1].status));
    }

    #[test]
    fn test_tabled_statuses_get_table_title_and_type() {
        for d in &STATUS_DEFAULTS {
            let mut doc = ProblemDocument::new().with_status(d.status);
            apply_defaults(&mut doc, None);
            assert_eq!(doc.title.as_deref(), Some(d.title), "status {}", d.status);
            assert_eq!(doc.type_uri.as_deref(), Some(d.type_uri), "status {}", d.status);
        }
    }

    #[test]
    fn test_untabled_statuses_get_reason_phrase_and_no_type() {
        for (status, phrase) in [
            (402, "Payment Required"),
            (410, "Gone"),
            (418, "I'm a teapot"),
            (429, "Too Many Requests"),
            (501, "Not Implemented"),
        ] {
            let mut doc = ProblemDocument::new();
            apply_defaults(&mut doc, Some(status));
            assert_eq!(doc.status, Some(status));
            assert_eq!(doc.title.as_deref(), Some(phrase));
            assert_eq!(doc.type_uri, None);
        }
    }

    #[test]
    fn test_unknown_status_without_phrase_leaves_title_unset() {
        let mut doc = ProblemDocument::new().with_status(599);
        apply_defaults(&mut doc, None);
        assert_eq!(doc.title, None);
        assert_eq!(doc.type_uri, None);
    }

    #[test]
    fn test_explicit_title_and_type_win() {
        let mut doc = ProblemDocument::new()
            .with_status(400)
            .with_title("Custom")
            .with_type("https://example.com/probs/other");
        apply_defaults(&mut doc, Some(500));

        assert_eq!(doc.status, Some(400));
        assert_eq!(doc.title.as_deref(), Some("Custom"));
        assert_eq!(doc.type_uri.as_deref(), Some("https://example.com/probs/other"));
    }

    #[test]
    fn test_explicit_title_kept_for_untabled_status() {
        let mut doc = ProblemDocument::new().with_title("Slow down");
        apply_defaults(&mut doc, Some(429));
        assert_eq!(doc.title.as_deref(), Some("Slow down"));
    }

    #[test]
    fn test_problem_for_status() {
        let doc = problem_for_status(409).unwrap();
        assert_eq!(doc.title.as_deref(), Some("Conflict"));
        assert_eq!(problem_for_status(42), Err(CoreError::InvalidStatus(42)));
    }

    #[test]
    fn test_missing_status_defaults() {
        let mut plain = ProblemDocument::new();
        apply_defaults(&mut plain, None);
        assert_eq!(plain.status, Some(500));
        assert_eq!(plain.title.as_deref(), Some("An error occurred while processing your request."));

        let mut validation = ProblemDocument::validation(ValidationErrors::new());
        apply_defaults(&mut validation, None);
        assert_eq!(validation.status, Some(400));
        assert_eq!(validation.title.as_deref(), Some("Bad Request"));
    }
}
