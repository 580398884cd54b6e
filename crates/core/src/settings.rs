//! Runtime settings shared by the server and the CLI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// How the finalizer writes the structured problem document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterMode {
    /// Always JSON; plain text only when serialization fails.
    Always,
    /// JSON only when the `Accept` header allows it, plain text otherwise.
    Negotiated,
}

/// Knobs of the response finalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeOptions {
    pub include_instance: bool,
    pub writer: WriterMode,
}

impl Default for FinalizeOptions {
    fn default() -> Self {
        ApiVariant::default().options()
    }
}

/// The three flavours of problem writing the server can run as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVariant {
    /// Unconditional JSON result, no instance.
    Problem,
    /// Negotiated JSON, no instance.
    Service,
    /// Negotiated JSON including the request instance.
    #[default]
    Writer,
}

impl ApiVariant {
    pub const fn options(self) -> FinalizeOptions {
        match self {
            Self::Problem => FinalizeOptions { include_instance: false, writer: WriterMode::Always },
            Self::Service => {
                FinalizeOptions { include_instance: false, writer: WriterMode::Negotiated }
            },
            Self::Writer => FinalizeOptions { include_instance: true, writer: WriterMode::Negotiated },
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Service => "service",
            Self::Writer => "writer",
        }
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVariant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "problem" => Ok(Self::Problem),
            "service" => Ok(Self::Service),
            "writer" => Ok(Self::Writer),
            _ => Err(CoreError::UnknownVariant(s.to_owned())),
        }
    }
}

/// Hosting environment. Only `Development` may expose error internals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
        })
    }
}

impl FromStr for Environment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(CoreError::UnknownEnvironment(s.to_owned())),
        }
    }
}
