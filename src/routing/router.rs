//! Route resolution.
//!
//! # Responsibilities
//! - Build the route table (root seed, routes, optional catch-all)
//! - Resolve a requested path to a view, following redirects
//! - Detect redirect cycles and report explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Query and fragment are stripped before matching and carried through
//! - Cycle detection by visited set, so resolution always terminates

use serde::Serialize;
use thiserror::Error;

use crate::observability::metrics;
use crate::routing::matcher::{MatchOptions, PatternError, RoutePattern};
use crate::routing::route::{builtin_routes, Route, RouteTarget, ViewId};
use crate::routing::table::{is_well_formed, Lookup, RouteTable};

/// Name given to the generated catch-all route.
pub const CATCH_ALL_ROUTE: &str = "catch-all";

/// Errors raised while building a router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid pattern in route `{route}`: {source}")]
    Pattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route `{0}` must have exactly one of `view` or `redirect`")]
    InvalidTarget(String),

    #[error("catch-all target `{0}` is not a rooted path")]
    InvalidCatchAll(String),
}

/// Errors raised while resolving a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No route matched and the table has no catch-all.
    #[error("no route matches `{path}`")]
    NoMatch { path: String },

    /// A redirect chain revisited a path. `chain` lists every path visited,
    /// ending with the repeated one.
    #[error("redirect cycle: {}", .chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },
}

impl ResolveError {
    /// Label used for logging and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::NoMatch { .. } => "no_match",
            ResolveError::RedirectCycle { .. } => "redirect_cycle",
        }
    }
}

/// The outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Path as requested, before redirects (without query or fragment).
    pub requested: String,

    /// Path of the route that rendered.
    pub path: String,

    /// Name of the route that rendered.
    pub name: String,

    pub view: ViewId,

    /// Paths redirected away from, in order.
    pub redirects: Vec<String>,

    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl ResolvedRoute {
    /// First path of the redirect chain, if any redirect happened.
    pub fn redirected_from(&self) -> Option<&str> {
        self.redirects.first().map(String::as_str)
    }

    /// The final path with query and fragment reattached.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(fragment) = &self.fragment {
            full.push('#');
            full.push_str(fragment);
        }
        full
    }
}

/// Resolves paths against an immutable route table.
#[derive(Debug)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    /// The built-in image/video table, optionally ending in a catch-all
    /// redirect to `catch_all`.
    pub fn new(catch_all: Option<&str>, options: MatchOptions) -> Result<Self, BuildError> {
        Self::with_routes(builtin_routes(), catch_all, options)
    }

    /// A table of the root seed, then `routes`, then the optional catch-all.
    pub fn with_routes(
        routes: Vec<Route>,
        catch_all: Option<&str>,
        options: MatchOptions,
    ) -> Result<Self, BuildError> {
        let mut all = Vec::with_capacity(routes.len() + 2);
        all.push(Route::root_seed());
        all.extend(routes);

        if let Some(target) = catch_all {
            if !is_well_formed(target) {
                return Err(BuildError::InvalidCatchAll(target.to_string()));
            }
            all.push(Route::new(
                CATCH_ALL_ROUTE,
                RoutePattern::Prefix(String::new()),
                RouteTarget::Redirect(target.to_string()),
            ));
        }

        Ok(Self::from_table(RouteTable::new(all, options)))
    }

    /// Wrap a table as-is, without the root seed.
    pub fn from_table(table: RouteTable) -> Self {
        tracing::debug!(
            routes = table.len(),
            catch_all = table.has_catch_all(),
            "Route table compiled"
        );
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Single step: what the table says about `path`, without following redirects.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        self.table.lookup(split_location(path).0)
    }

    /// Resolve `requested` to a view, following redirects.
    pub fn resolve(&self, requested: &str) -> Result<ResolvedRoute, ResolveError> {
        let (path, query, fragment) = split_location(requested);
        let mut current = path.to_string();
        let mut visited: Vec<String> = Vec::new();

        let result = loop {
            match self.table.lookup(&current) {
                Lookup::View { route, view } => {
                    break Ok(ResolvedRoute {
                        requested: path.to_string(),
                        path: current,
                        name: route.name().to_string(),
                        view: view.clone(),
                        redirects: visited,
                        query: query.map(str::to_string),
                        fragment: fragment.map(str::to_string),
                    });
                }
                Lookup::Redirect { route, to } => {
                    let next = split_location(to).0.to_string();
                    tracing::debug!(
                        route = %route.name(),
                        from = %current,
                        to = %next,
                        "Following redirect"
                    );
                    metrics::record_redirect(route.name());

                    visited.push(current);
                    if visited.contains(&next) {
                        visited.push(next);
                        break Err(ResolveError::RedirectCycle { chain: visited });
                    }
                    current = next;
                }
                Lookup::NoMatch => break Err(ResolveError::NoMatch { path: current }),
            }
        };

        match &result {
            Ok(resolved) => {
                tracing::debug!(
                    requested = %resolved.requested,
                    path = %resolved.path,
                    view = %resolved.view,
                    redirects = resolved.redirects.len(),
                    "Path resolved"
                );
                metrics::record_resolution(resolved.view.as_str(), resolved.redirects.len());
            }
            Err(err @ ResolveError::NoMatch { .. }) => {
                tracing::warn!(requested = %requested, error = %err, "Path not resolved");
                metrics::record_failure(err.kind());
            }
            Err(err @ ResolveError::RedirectCycle { .. }) => {
                tracing::error!(requested = %requested, error = %err, "Route table misconfigured");
                metrics::record_failure(err.kind());
            }
        }

        result
    }
}

/// Split `path?query#fragment` into its parts.
fn split_location(location: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = match location.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (location, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };
    (path, query, fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::{IMAGE_PATH, VIDEO_PATH};

    fn router() -> Router {
        Router::new(None, MatchOptions::default()).unwrap()
    }

    #[test]
    fn test_resolve_literal_paths() {
        let router = router();

        let image = router.resolve(IMAGE_PATH).unwrap();
        assert_eq!(image.view, ViewId::image_compressor());
        assert!(image.redirects.is_empty());

        let video = router.resolve(VIDEO_PATH).unwrap();
        assert_eq!(video.view, ViewId::video_compressor());
        assert_eq!(video.name, "video");
    }

    #[test]
    fn test_root_redirects_to_image() {
        let resolved = router().resolve("/").unwrap();
        assert_eq!(resolved.path, IMAGE_PATH);
        assert_eq!(resolved.redirected_from(), Some("/"));
        assert_eq!(resolved.view, ViewId::image_compressor());
    }

    #[test]
    fn test_query_and_fragment_are_carried() {
        let resolved = router().resolve("/?quality=80#top").unwrap();
        assert_eq!(resolved.requested, "/");
        assert_eq!(resolved.path, IMAGE_PATH);
        assert_eq!(resolved.query.as_deref(), Some("quality=80"));
        assert_eq!(resolved.fragment.as_deref(), Some("top"));
        assert_eq!(resolved.full_path(), "/image?quality=80#top");
    }

    #[test]
    fn test_no_match_without_catch_all() {
        let err = router().resolve("/unknown").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NoMatch {
                path: "/unknown".into()
            }
        );
        assert_eq!(err.kind(), "no_match");
    }

    #[test]
    fn test_catch_all_redirects_through_root() {
        let router = Router::new(Some("/"), MatchOptions::default()).unwrap();
        let resolved = router.resolve("/anything/not/defined").unwrap();
        assert_eq!(
            resolved.redirects,
            vec!["/anything/not/defined".to_string(), "/".to_string()]
        );
        assert_eq!(resolved.path, IMAGE_PATH);
    }

    #[test]
    fn test_invalid_catch_all_rejected() {
        assert_eq!(
            Router::new(Some("image"), MatchOptions::default()).unwrap_err(),
            BuildError::InvalidCatchAll("image".into())
        );
    }

    #[test]
    fn test_redirect_cycle_detected() {
        let routes = vec![
            Route::redirect("a", "/A", "/B").unwrap(),
            Route::redirect("b", "/B", "/A").unwrap(),
        ];
        let router = Router::from_table(RouteTable::new(routes, MatchOptions::default()));
        let err = router.resolve("/A").unwrap_err();
        assert_eq!(
            err,
            ResolveError::RedirectCycle {
                chain: vec!["/A".into(), "/B".into(), "/A".into()]
            }
        );
        assert_eq!(err.to_string(), "redirect cycle: /A -> /B -> /A");
    }

    #[test]
    fn test_self_redirect_is_a_cycle() {
        let routes = vec![Route::redirect("loop", "/loop", "/loop").unwrap()];
        let router = Router::with_routes(routes, None, MatchOptions::default()).unwrap();
        assert!(matches!(
            router.resolve("/loop"),
            Err(ResolveError::RedirectCycle { .. })
        ));
    }

    #[test]
    fn test_redirect_to_missing_route_reports_target() {
        let routes = vec![Route::redirect("old", "/old", "/gone").unwrap()];
        let router = Router::with_routes(routes, None, MatchOptions::default()).unwrap();
        assert_eq!(
            router.resolve("/old").unwrap_err(),
            ResolveError::NoMatch {
                path: "/gone".into()
            }
        );
    }

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("/a"), ("/a", None, None));
        assert_eq!(split_location("/a?b=1"), ("/a", Some("b=1"), None));
        assert_eq!(split_location("/a#x?y"), ("/a", None, Some("x?y")));
        assert_eq!(split_location("/a?b#c"), ("/a", Some("b"), Some("c")));
    }
}
