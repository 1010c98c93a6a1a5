//! Ordered route table and single-step lookup.
//!
//! # Responsibilities
//! - Store compiled routes in declaration order
//! - Find the first route matching a path
//! - Report the step outcome: view, redirect, or explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(n) scan, first match wins, no specificity sorting
//! - Malformed paths match nothing except a catch-all

use crate::routing::matcher::{MatchOptions, Matcher};
use crate::routing::route::{Route, RouteTarget, ViewId};

#[derive(Debug)]
struct CompiledRoute {
    route: Route,
    matcher: Box<dyn Matcher>,
}

/// Outcome of matching one path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// A view route matched.
    View { route: &'a Route, view: &'a ViewId },

    /// A redirect route matched; `to` must be resolved next.
    Redirect { route: &'a Route, to: &'a str },

    /// Nothing matched.
    NoMatch,
}

/// Immutable, ordered list of routes.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    options: MatchOptions,
}

impl RouteTable {
    /// Compile routes in the given order.
    pub fn new(routes: Vec<Route>, options: MatchOptions) -> Self {
        let routes = routes
            .into_iter()
            .map(|route| CompiledRoute {
                matcher: route.pattern().matcher(options),
                route,
            })
            .collect();
        Self { routes, options }
    }

    /// Match `path` against the table, first match wins.
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        let found = if is_well_formed(path) {
            self.routes.iter().find(|c| c.matcher.matches(path))
        } else {
            self.routes.iter().find(|c| c.route.pattern().is_catch_all())
        };

        match found.map(|c| &c.route) {
            Some(route) => match route.target() {
                RouteTarget::View(view) => Lookup::View { route, view },
                RouteTarget::Redirect(to) => Lookup::Redirect { route, to },
            },
            None => Lookup::NoMatch,
        }
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|c| &c.route)
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn has_catch_all(&self) -> bool {
        self.routes().any(|r| r.pattern().is_catch_all())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// A path the table is willing to match: rooted, no whitespace or control chars.
pub fn is_well_formed(path: &str) -> bool {
    path.starts_with('/') && !path.chars().any(|c| c.is_whitespace() || c.is_control())
}
