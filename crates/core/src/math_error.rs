//! Math domain errors and their projection onto problem documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{MATH_PROBLEM_TITLE, MATH_PROBLEM_TYPE_BASE, ProblemDocument};

/// Closed set of math validation failures. All of them are client errors (400).
///
/// The `Display` text is the problem `detail`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MathErrorKind {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    #[error("The radicand cannot be negative for a square root operation.")]
    NegativeRadicand,
    #[error("The value must be positive for a logarithm operation.")]
    InvalidLogarithm,
    #[error("The factorial result is too large to be represented.")]
    Overflow,
    #[error("The value must be between -1 and 1 for the inverse cosine operation.")]
    InvalidTrigonometricArgument,
    #[error("Factorial must be a non-negative integer less than or equal to 100.")]
    OutOfRangeFactorial,
    #[error("Square root of a negative number results in a complex number, which is not supported.")]
    ComplexNumberResult,
}

impl MathErrorKind {
    pub const ALL: [Self; 7] = [
        Self::DivisionByZero,
        Self::NegativeRadicand,
        Self::InvalidLogarithm,
        Self::Overflow,
        Self::InvalidTrigonometricArgument,
        Self::OutOfRangeFactorial,
        Self::ComplexNumberResult,
    ];

    /// Last path segment of the problem type URI.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::DivisionByZero => "division-by-zero",
            Self::NegativeRadicand => "invalid-radicand",
            Self::InvalidLogarithm => "invalid-logarithm",
            Self::Overflow => "overflow",
            Self::InvalidTrigonometricArgument => "invalid-trigonometric-argument",
            Self::OutOfRangeFactorial => "out-of-range-factorial",
            Self::ComplexNumberResult => "complex-number-operation",
        }
    }

    pub fn type_uri(self) -> String {
        format!("{MATH_PROBLEM_TYPE_BASE}{}", self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown math error tag: {0}")]
pub struct UnknownMathError(pub String);

impl FromStr for MathErrorKind {
    type Err = UnknownMathError;

    /// Accepts the type URI slug, e.g. `division-by-zero`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownMathError(s.to_owned()))
    }
}

/// `detail` and `type` derived from a math error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathProjection {
    pub detail: String,
    pub type_uri: String,
}

/// Project a math error onto `(detail, type)`. Total: `None` maps to the generic pair.
pub fn project(kind: Option<MathErrorKind>) -> MathProjection {
    match kind {
        Some(kind) => MathProjection { detail: kind.to_string(), type_uri: kind.type_uri() },
        None => MathProjection {
            detail: "Unknown math error encountered".to_owned(),
            type_uri: format!("{MATH_PROBLEM_TYPE_BASE}other"),
        },
    }
}

/// Math failure attached to a single request by the handler that detected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathErrorContext {
    pub kind: Option<MathErrorKind>,
    pub instance: Option<String>,
}

impl MathErrorContext {
    pub fn new(kind: MathErrorKind) -> Self {
        Self { kind: Some(kind), instance: None }
    }

    /// Context for a kind this build does not recognize.
    pub fn unknown() -> Self {
        Self { kind: None, instance: None }
    }

    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Overwrite `type`, `title` and `detail` of `doc`; copy the instance when asked to.
    pub fn apply_to(&self, doc: &mut ProblemDocument, include_instance: bool) {
        let projection = project(self.kind);
        doc.type_uri = Some(projection.type_uri);
        doc.title = Some(MATH_PROBLEM_TITLE.to_owned());
        doc.detail = Some(projection.detail);
        if include_instance {
            if let Some(instance) = &self.instance {
                doc.instance = Some(instance.clone());
            }
        }
    }
}

impl fmt::Display for MathErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            Some(kind) => f.write_str(kind.slug()),
            None => f.write_str("other"),
        }
    }
}
