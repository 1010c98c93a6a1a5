//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or Variant preset
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → lifecycle::startup builds Router + History + Navigator
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{HistoryConfig, ObservabilityConfig, RouteConfig, RouterConfig, Variant};
pub use validation::{validate_config, ValidationError};
