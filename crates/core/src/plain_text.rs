//! Line-oriented fallback rendering of a problem document.

use std::fmt::Write as _;

use serde_json::Value;

use crate::ProblemDocument;

/// Render `doc` as `key: value` lines.
///
/// Standard members come first in the order `type, title, status, detail,
/// instance`, then validation errors, then extensions in insertion order.
/// Unset members are skipped. Never fails.
pub fn render_plain_text(doc: &ProblemDocument) -> String {
    let mut out = String::new();
    let mut line = |key: &str, value: &dyn std::fmt::Display| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{key}: {value}");
    };

    if let Some(type_uri) = &doc.type_uri {
        line("type", type_uri);
    }
    if let Some(title) = &doc.title {
        line("title", title);
    }
    if let Some(status) = doc.status {
        line("status", &status);
    }
    if let Some(detail) = &doc.detail {
        line("detail", detail);
    }
    if let Some(instance) = &doc.instance {
        line("instance", instance);
    }
    if let Some(errors) = &doc.errors {
        for (field, messages) in errors {
            line(&format!("errors.{field}"), &messages.join("; "));
        }
    }
    for (key, value) in &doc.extensions {
        match value {
            Value::String(s) => line(key, s),
            other => line(key, other),
        }
    }
    out
}
