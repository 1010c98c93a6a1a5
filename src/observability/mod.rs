//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / navigation produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms via metrics)
//!
//! Consumers:
//!     → stderr subscriber installed by the CLI
//!     → whatever recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (path, view, route) on every event
//! - Resolution at debug, no-match at warn, redirect cycles at error
//! - Metrics are cheap no-ops unless a recorder is installed

pub mod logging;
pub mod metrics;
