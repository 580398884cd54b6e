use std::result::Result as StdResult;

use thiserror::Error;

use crate::MathErrorKind;

/// Errors produced by problem-api core logic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(transparent)]
    Math(#[from] MathErrorKind),

    #[error("Factorial is not defined for negative numbers.")]
    NegativeFactorial,

    #[error("Unknown API variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown environment: {0}")]
    UnknownEnvironment(String),

    #[error("Invalid HTTP status code: {0}")]
    InvalidStatus(u16),
}

pub type Result<T> = StdResult<T, CoreError>;
