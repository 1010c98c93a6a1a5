//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Requested path ("/", "/video?x=1", ...)
//!     → router.rs (strip query/fragment, resolution loop)
//!     → table.rs (ordered lookup)
//!     → matcher.rs (evaluate one pattern)
//!     → View: ResolvedRoute
//!     → Redirect: re-resolve target (cycle-guarded)
//!     → NoMatch: explicit error
//!
//! Table construction (at startup):
//!     root seed "/" → "/image"
//!     → declared routes, in order
//!     → optional catch-all "/*" → target
//!     → compile matchers, freeze
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: literal and trailing-wildcard patterns only
//! - Deterministic: same input always resolves the same way
//! - First match wins (declaration order)

pub mod matcher;
pub mod route;
pub mod router;
pub mod table;

pub use matcher::{MatchOptions, PatternError, RoutePattern};
pub use route::{Route, RouteTarget, ViewId};
pub use router::{BuildError, ResolveError, ResolvedRoute, Router};
pub use table::{Lookup, RouteTable};
