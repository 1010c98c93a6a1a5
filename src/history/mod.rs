//! History subsystem.
//!
//! # Data Flow
//! ```text
//! Outbound: logical path "/image"
//!     → address.rs href()
//!     → hash mode: "/#/image"    path mode (base "/app"): "/app/image"
//!
//! Inbound: address bar / back-forward signal
//!     → address.rs location()
//!     → logical path, or None when outside the base
//! ```
//!
//! # Design Decisions
//! - Mode is fixed at startup and never changes which view resolves
//! - The base path only anchors paths in path mode

pub mod address;
pub mod mode;

pub use address::History;
pub use mode::{HistoryMode, UnknownHistoryMode};
