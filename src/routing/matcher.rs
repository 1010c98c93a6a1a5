//! Route pattern parsing and path matching.
//!
//! # Responsibilities
//! - Parse route patterns (`/image`, `/docs/*`, `/*`)
//! - Match a request path against a single pattern
//! - Apply case and trailing-slash options uniformly
//!
//! # Design Decisions
//! - Literal and trailing-wildcard patterns only, no parameters or regex
//! - Wildcards are segment-aware: `/docs/*` never matches `/docsx`
//! - A wildcard suffix may be empty: `/docs/*` matches `/docs`
//! - Case-insensitive and trailing-slash tolerant unless configured otherwise

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,

    #[error("pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),

    #[error("pattern `{0}` contains whitespace or control characters")]
    InvalidCharacter(String),

    /// `*` is only allowed as the whole final segment.
    #[error("pattern `{0}` has a misplaced `*` (only a trailing `/*` is supported)")]
    MisplacedWildcard(String),
}

/// Options that control how paths are compared against patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Compare paths case-sensitively (`/Image` does not match `/image`).
    pub case_sensitive: bool,

    /// Treat a trailing slash as significant (`/image/` does not match `/image`).
    pub strict: bool,
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    /// Matches one literal path.
    Exact(String),

    /// Matches the base path and anything below it. The base of `/*` is empty.
    Prefix(String),
}

impl RoutePattern {
    /// Parse a pattern from its textual form.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        if !raw.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        }
        if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(PatternError::InvalidCharacter(raw.to_string()));
        }

        match raw.strip_suffix("/*") {
            Some(base) if !base.contains('*') => Ok(RoutePattern::Prefix(base.to_string())),
            Some(_) => Err(PatternError::MisplacedWildcard(raw.to_string())),
            None if raw.contains('*') => Err(PatternError::MisplacedWildcard(raw.to_string())),
            None => Ok(RoutePattern::Exact(raw.to_string())),
        }
    }

    /// True for the `/*` pattern that matches every well-formed path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self, RoutePattern::Prefix(base) if base.is_empty())
    }

    /// Build the matcher for this pattern.
    pub fn matcher(&self, options: MatchOptions) -> Box<dyn Matcher> {
        match self {
            RoutePattern::Exact(path) => Box::new(ExactMatcher::new(path, options)),
            RoutePattern::Prefix(base) => Box::new(WildcardMatcher::new(base, options)),
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutePattern::Exact(path) => f.write_str(path),
            RoutePattern::Prefix(base) => write!(f, "{}/*", base),
        }
    }
}

/// Trait for matching a request path against a route condition.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns true if the path matches this condition.
    fn matches(&self, path: &str) -> bool;
}

/// Matches one literal path.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
    options: MatchOptions,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>, options: MatchOptions) -> Self {
        let path = path.into();
        Self {
            path: trim_trailing_slash(&path, options).to_string(),
            options,
        }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        eq(trim_trailing_slash(path, self.options), &self.path, self.options)
    }
}

/// Matches a base path followed by any (possibly empty) remaining suffix.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    base: String,
    options: MatchOptions,
}

impl WildcardMatcher {
    pub fn new(base: impl Into<String>, options: MatchOptions) -> Self {
        Self {
            base: base.into(),
            options,
        }
    }
}

impl Matcher for WildcardMatcher {
    fn matches(&self, path: &str) -> bool {
        if !path.starts_with('/') {
            return false;
        }

        let Some(head) = path.get(..self.base.len()) else {
            return false;
        };
        if !eq(head, &self.base, self.options) {
            return false;
        }

        // The remainder must start a new segment, or be empty.
        let rest = &path[self.base.len()..];
        rest.is_empty() || rest.starts_with('/')
    }
}

fn trim_trailing_slash(path: &str, options: MatchOptions) -> &str {
    if options.strict || path.len() <= 1 {
        return path;
    }
    path.strip_suffix('/').unwrap_or(path)
}

fn eq(a: &str, b: &str, options: MatchOptions) -> bool {
    if options.case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}
