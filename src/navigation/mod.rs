//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Host input (address bar, push/replace call, back/forward signal)
//!     → navigator.rs (history.location for addresses)
//!     → routing::Router::resolve
//!     → Ok: swap current route, update session history
//!         → event.rs RouteChangeEvent → listeners
//!     → Err: state untouched, error returned to host
//! ```
//!
//! # States
//! - Idle: no resolution in progress
//! - Resolving: following a redirect chain (inside one `resolve` call)
//!
//! Every navigation returns to Idle, either with a new current route or an error.

pub mod event;
pub mod navigator;

pub use event::{NavigationDirection, RouteChangeEvent};
pub use navigator::{NavigationError, Navigator};
