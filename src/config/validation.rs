//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route patterns and targets
//! - Detect duplicate names and patterns, and routes shadowing the root seed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::route::IMAGE_PATH;
use crate::routing::table::is_well_formed;
use crate::routing::{MatchOptions, PatternError, ResolveError, RoutePattern, Router};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{0} has an empty name")]
    EmptyName(usize),

    #[error("route name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("route `{route}` has an invalid path: {source}")]
    InvalidPattern {
        route: String,
        #[source]
        source: PatternError,
    },

    #[error("route `{route}` repeats the path `{path}`")]
    DuplicatePattern { route: String, path: String },

    #[error("route `{0}` shadows the fixed `/` redirect")]
    ShadowsRoot(String),

    #[error("route `{0}` sets both `view` and `redirect`")]
    AmbiguousTarget(String),

    #[error("route `{0}` sets neither `view` nor `redirect`")]
    MissingTarget(String),

    #[error("route `{route}` redirects to `{target}`, which is not a rooted path")]
    InvalidRedirect { route: String, target: String },

    #[error("route `{0}` has an empty view name")]
    EmptyView(String),

    #[error("catch-all target `{0}` is not a rooted path")]
    InvalidCatchAll(String),

    #[error("history base `{0}` must start with `/`")]
    InvalidBase(String),

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),

    /// The fixed `/` redirect must still land on a view with the configured routes.
    #[error("the `/` redirect to `{target}` does not reach a view: {source}")]
    RootUnresolved {
        target: String,
        #[source]
        source: ResolveError,
    },
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(base) = &config.history.base {
        if !base.is_empty() && !base.starts_with('/') {
            errors.push(ValidationError::InvalidBase(base.clone()));
        }
    }

    if let Some(target) = &config.catch_all {
        if !is_well_formed(target) {
            errors.push(ValidationError::InvalidCatchAll(target.clone()));
        }
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    let mut names = HashSet::new();
    let mut patterns = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(index));
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }

        match RoutePattern::parse(&route.path) {
            Ok(RoutePattern::Exact(path)) if path == "/" => {
                errors.push(ValidationError::ShadowsRoot(route.name.clone()));
            }
            Ok(pattern) => {
                if !patterns.insert(pattern_key(&pattern, config.matching)) {
                    errors.push(ValidationError::DuplicatePattern {
                        route: route.name.clone(),
                        path: route.path.clone(),
                    });
                }
            }
            Err(source) => errors.push(ValidationError::InvalidPattern {
                route: route.name.clone(),
                source,
            }),
        }

        match (&route.view, &route.redirect) {
            (Some(_), Some(_)) => {
                errors.push(ValidationError::AmbiguousTarget(route.name.clone()));
            }
            (None, None) => errors.push(ValidationError::MissingTarget(route.name.clone())),
            (Some(view), None) if view.trim().is_empty() => {
                errors.push(ValidationError::EmptyView(route.name.clone()));
            }
            (None, Some(target)) if !is_well_formed(target) => {
                errors.push(ValidationError::InvalidRedirect {
                    route: route.name.clone(),
                    target: target.clone(),
                });
            }
            _ => {}
        }
    }

    if let Some(err) = check_root(config) {
        errors.push(err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Two patterns with the same key match the same paths under `options`.
fn pattern_key(pattern: &RoutePattern, options: MatchOptions) -> (bool, String) {
    let (wildcard, path) = match pattern {
        RoutePattern::Exact(path) if !options.strict && path.len() > 1 => {
            (false, path.strip_suffix('/').unwrap_or(path.as_str()))
        }
        RoutePattern::Exact(path) => (false, path.as_str()),
        RoutePattern::Prefix(base) => (true, base.as_str()),
    };
    let path = if options.case_sensitive {
        path.to_string()
    } else {
        path.to_ascii_lowercase()
    };
    (wildcard, path)
}

/// Resolve `/` against the table the config describes. Skipped when the
/// routes themselves do not compile, those errors are reported already.
fn check_root(config: &RouterConfig) -> Option<ValidationError> {
    let catch_all = config.catch_all.as_deref();
    let router = if config.routes.is_empty() {
        Router::new(catch_all, config.matching).ok()?
    } else {
        let routes = config
            .routes
            .iter()
            .map(|route| route.compile())
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        Router::with_routes(routes, catch_all, config.matching).ok()?
    };

    router
        .resolve("/")
        .err()
        .map(|source| ValidationError::RootUnresolved {
            target: IMAGE_PATH.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{RouteConfig, Variant};

    fn route(name: &str, path: &str, view: Option<&str>, redirect: Option<&str>) -> RouteConfig {
        RouteConfig {
            name: name.to_string(),
            path: path.to_string(),
            view: view.map(str::to_string),
            redirect: redirect.map(str::to_string),
        }
    }

    #[test]
    fn test_presets_are_valid() {
        for variant in Variant::ALL {
            assert_eq!(validate_config(&RouterConfig::for_variant(variant)), Ok(()));
        }
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = RouterConfig::default();
        config.history.base = Some("app".into());
        config.catch_all = Some("home".into());
        config.observability.log_level = "loud".into();
        config.routes = vec![
            route("image", "/image", Some("image-compressor-view"), None),
            route("image", "/image", Some("other-view"), None),
            route("home", "/", None, Some("/image")),
            route("", "bad", Some("v"), Some("/x")),
            route("none", "/none", None, None),
            route("hop", "/hop", None, Some("elsewhere")),
        ];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBase("app".into()),
                ValidationError::InvalidCatchAll("home".into()),
                ValidationError::InvalidLogLevel("loud".into()),
                ValidationError::DuplicateName("image".into()),
                ValidationError::DuplicatePattern {
                    route: "image".into(),
                    path: "/image".into()
                },
                ValidationError::ShadowsRoot("home".into()),
                ValidationError::EmptyName(3),
                ValidationError::InvalidPattern {
                    route: "".into(),
                    source: PatternError::MissingLeadingSlash("bad".into())
                },
                ValidationError::AmbiguousTarget("".into()),
                ValidationError::MissingTarget("none".into()),
                ValidationError::InvalidRedirect {
                    route: "hop".into(),
                    target: "elsewhere".into()
                },
            ]
        );
    }

    #[test]
    fn test_patterns_equal_under_match_options_are_duplicates() {
        let mut config = RouterConfig::default();
        config.routes = vec![
            route("image", "/image", Some("image-compressor-view"), None),
            route("upper", "/Image", Some("other-view"), None),
            route("slash", "/image/", Some("other-view"), None),
        ];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::DuplicatePattern {
                    route: "upper".into(),
                    path: "/Image".into()
                },
                ValidationError::DuplicatePattern {
                    route: "slash".into(),
                    path: "/image/".into()
                },
            ]
        );

        config.matching = MatchOptions {
            case_sensitive: true,
            strict: true,
        };
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_root_must_reach_a_view() {
        let mut config = RouterConfig::default();
        config.routes = vec![route("video", "/video", Some("video-compressor-view"), None)];
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::RootUnresolved {
                target: "/image".into(),
                source: ResolveError::NoMatch {
                    path: "/image".into()
                },
            }])
        );

        // A catch-all back to `/` turns the dead end into a cycle.
        config.catch_all = Some("/".into());
        assert!(matches!(
            validate_config(&config).unwrap_err().as_slice(),
            [ValidationError::RootUnresolved {
                source: ResolveError::RedirectCycle { .. },
                ..
            }]
        ));
    }

    #[test]
    fn test_root_may_reach_image_through_a_wildcard() {
        let mut config = RouterConfig::default();
        config.routes = vec![route("media", "/*", Some("image-compressor-view"), None)];
        assert_eq!(validate_config(&config), Ok(()));
    }

    #[test]
    fn test_wildcard_routes_accepted() {
        let mut config = RouterConfig::default();
        config.routes = vec![
            route("image", "/image", Some("image-compressor-view"), None),
            route("legacy", "/legacy/*", None, Some("/video")),
        ];
        assert_eq!(validate_config(&config), Ok(()));
    }
}
