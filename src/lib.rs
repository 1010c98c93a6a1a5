//! View router for the media compressor front-end.
//!
//! # Architecture Overview
//!
//! ```text
//!     host navigation input
//!     (address bar, push/replace, back/forward)
//!              │
//!              ▼
//!     ┌──────────────┐   location()   ┌──────────────┐
//!     │  navigation  │───────────────▶│   history    │
//!     │  navigator   │◀───────────────│ hash / path  │
//!     └──────┬───────┘     href()     └──────────────┘
//!            │ resolve()
//!            ▼
//!     ┌──────────────┐    lookup()    ┌──────────────┐
//!     │   routing    │───────────────▶│ table +      │
//!     │   router     │  (redirects,   │ matchers     │
//!     └──────┬───────┘  cycle guard)  └──────────────┘
//!            │
//!            ▼
//!     ResolvedRoute { view: image-compressor-view | video-compressor-view }
//!
//!     Cross-cutting: config (TOML + presets), lifecycle (startup),
//!                    observability (tracing, metrics)
//! ```

pub mod config;
pub mod history;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::{RouterConfig, Variant};
pub use history::{History, HistoryMode};
pub use navigation::{NavigationError, Navigator};
pub use routing::{ResolveError, ResolvedRoute, Router, ViewId};
