//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::history::HistoryMode;
use crate::routing::{BuildError, MatchOptions, Route};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// How paths appear in the external address.
    pub history: HistoryConfig,

    /// Routes following the fixed `/` seed. Empty means the built-in
    /// image and video routes.
    pub routes: Vec<RouteConfig>,

    /// Redirect target for paths no route matches. None disables the catch-all.
    pub catch_all: Option<String>,

    /// Path comparison options.
    pub matching: MatchOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub mode: HistoryMode,

    /// Base path (e.g., "/app/"). In path mode it prefixes every path.
    pub base: Option<String>,
}

/// A route entry. Exactly one of `view` and `redirect` must be set.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Route identifier for logging/metrics.
    pub name: String,

    /// Pattern: a literal path or a path ending in `/*`.
    pub path: String,

    /// View rendered by this route.
    #[serde(default)]
    pub view: Option<String>,

    /// Path to resolve instead.
    #[serde(default)]
    pub redirect: Option<String>,
}

impl RouteConfig {
    /// Compile into a table entry.
    pub fn compile(&self) -> Result<Route, BuildError> {
        let route = match (&self.view, &self.redirect) {
            (Some(view), None) => Route::view(&self.name, &self.path, view.as_str()),
            (None, Some(target)) => Route::redirect(&self.name, &self.path, target.as_str()),
            _ => return Err(BuildError::InvalidTarget(self.name.clone())),
        };
        route.map_err(|source| BuildError::Pattern {
            route: self.name.clone(),
            source,
        })
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown variant `{0}` (expected `hash`, `path` or `path-fallback`)")]
pub struct UnknownVariant(pub String);

/// The three shipped router setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Hash history, unknown paths unresolved.
    HashNoFallback,
    /// Path history, unknown paths unresolved.
    PathNoFallback,
    /// Path history, unknown paths redirected to `/`.
    PathWithFallback,
}

impl Variant {
    pub const ALL: [Variant; 3] = [
        Variant::HashNoFallback,
        Variant::PathNoFallback,
        Variant::PathWithFallback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::HashNoFallback => "hash",
            Variant::PathNoFallback => "path",
            Variant::PathWithFallback => "path-fallback",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

impl RouterConfig {
    /// Configuration of one of the shipped setups.
    pub fn for_variant(variant: Variant) -> Self {
        let (mode, catch_all) = match variant {
            Variant::HashNoFallback => (HistoryMode::Hash, None),
            Variant::PathNoFallback => (HistoryMode::Path, None),
            Variant::PathWithFallback => (HistoryMode::Path, Some("/".to_string())),
        };
        Self {
            history: HistoryConfig { mode, base: None },
            catch_all,
            ..Self::default()
        }
    }
}
