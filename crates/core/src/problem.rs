//! RFC 9457 problem document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation errors keyed by the offending input (`query`, `path`, a field name).
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// A problem document as described by RFC 9457.
///
/// Every standard member is optional until [`crate::apply_defaults`] resolves
/// the status and back-fills `title` and `type`. Extension members are kept
/// in insertion order and serialized at the top level of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ProblemDocument {
    /// URI identifying the problem category.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_uri: Option<String>,
    /// Short human-readable summary of the problem category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// HTTP status code of this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Explanation specific to this occurrence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// URI identifying this occurrence, usually `METHOD /path?query`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// Present only on the validation-problem variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
    /// Extension members, e.g. `traceId`.
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl ProblemDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validation-problem variant: defaults to 400 when no status is known.
    pub fn validation(errors: ValidationErrors) -> Self {
        Self { errors: Some(errors), ..Self::default() }
    }

    pub fn is_validation(&self) -> bool {
        self.errors.is_some()
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_type(mut self, type_uri: impl Into<String>) -> Self {
        self.type_uri = Some(type_uri.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Insert or replace an extension member. A replaced key keeps its position.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }
}
