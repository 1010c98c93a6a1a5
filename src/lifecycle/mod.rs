//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Compile routes → Router + History → Navigator
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then routing, then navigation
//! - Nothing to shut down: no background tasks, no I/O after startup

pub mod startup;

pub use startup::{build_history, build_navigator, build_router, StartupError};
