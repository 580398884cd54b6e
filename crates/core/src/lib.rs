//! Core types and pure logic for problem-api
//!
//! Everything here is independent of the serving framework: building RFC 9457
//! problem documents, the status code defaults table, math error projection,
//! `Accept` negotiation and the plain-text fallback rendering.

mod constants;
mod env_config;
mod error;
mod math;
mod math_error;
mod negotiation;
mod plain_text;
mod problem;
mod settings;
mod status_defaults;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use math::*;
pub use math_error::*;
pub use negotiation::*;
pub use plain_text::*;
pub use problem::*;
pub use settings::*;
pub use status_defaults::*;
