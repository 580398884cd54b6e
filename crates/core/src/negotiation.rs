//! `Accept` header negotiation for problem documents.
//!
//! Parameters (including `q`) are ignored and a single matching range is
//! enough.

use crate::{APPLICATION_JSON, APPLICATION_PROBLEM_JSON};

/// Split an `Accept` value into media-type tokens, dropping parameters and empty segments.
pub fn parse_accept(header: Option<&str>) -> Vec<&str> {
    header
        .unwrap_or_default()
        .split(',')
        .filter_map(|segment| segment.split(';').next())
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// A parsed `type/subtype` media range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRange<'a> {
    pub main: &'a str,
    pub sub: &'a str,
}

impl<'a> MediaRange<'a> {
    /// `None` for anything that is not `type/subtype` with non-empty halves.
    pub fn parse(token: &'a str) -> Option<Self> {
        let (main, sub) = token.split_once('/')?;
        let (main, sub) = (main.trim(), sub.trim());
        if main.is_empty() || sub.is_empty() || sub.contains('/') {
            return None;
        }
        if main == "*" && sub != "*" {
            return None;
        }
        Some(Self { main, sub })
    }

    /// Whether `media_type` (a concrete `type/subtype`) falls within this range.
    pub fn subsumes(&self, media_type: &str) -> bool {
        let Some((main, sub)) = media_type.split_once('/') else {
            return false;
        };
        if self.main == "*" {
            return true;
        }
        if !self.main.eq_ignore_ascii_case(main) {
            return false;
        }
        self.sub == "*" || self.sub.eq_ignore_ascii_case(sub)
    }
}

/// Whether a JSON problem document is an acceptable representation.
///
/// A missing or blank header accepts anything. Malformed tokens never match.
pub fn can_write_json_problem(accept: Option<&str>) -> bool {
    let tokens = parse_accept(accept);
    if tokens.is_empty() {
        return true;
    }
    tokens.into_iter().filter_map(MediaRange::parse).any(|range| {
        range.subsumes(APPLICATION_JSON) || range.subsumes(APPLICATION_PROBLEM_JSON)
    })
}
