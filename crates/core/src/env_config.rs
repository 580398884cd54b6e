//! Server settings read from `PROBLEM_API_*` environment variables.

use std::fmt::Display;
use std::str::FromStr;

use crate::{ApiVariant, DEFAULT_HOST, DEFAULT_PORT, Environment};

pub const ENV_HOST: &str = "PROBLEM_API_HOST";
pub const ENV_PORT: &str = "PROBLEM_API_PORT";
pub const ENV_VARIANT: &str = "PROBLEM_API_VARIANT";
pub const ENV_ENVIRONMENT: &str = "PROBLEM_API_ENVIRONMENT";

/// Environment layer of the server configuration. CLI flags override it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub variant: ApiVariant,
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            variant: ApiVariant::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Unset or blank keys keep their default silently; unparsable values
    /// keep their default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: setting(ENV_HOST, lookup(ENV_HOST), defaults.host),
            port: setting(ENV_PORT, lookup(ENV_PORT), defaults.port),
            variant: setting(ENV_VARIANT, lookup(ENV_VARIANT), defaults.variant),
            environment: setting(ENV_ENVIRONMENT, lookup(ENV_ENVIRONMENT), defaults.environment),
        }
    }
}

fn setting<T: FromStr + Display>(key: &str, raw: Option<String>, default: T) -> T {
    let Some(raw) = raw.filter(|v| !v.trim().is_empty()) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "invalid setting, using default");
            default
        },
    }
}
