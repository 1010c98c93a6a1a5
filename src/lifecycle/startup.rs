//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Compile the route table
//! - Assemble router, history and navigator in dependency order
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Validation runs even for configs built in code, not only loaded ones

use thiserror::Error;

use crate::config::{validate_config, ConfigError, RouteConfig, RouterConfig};
use crate::history::History;
use crate::navigation::Navigator;
use crate::routing::{BuildError, Router};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Route table error: {0}")]
    Build(#[from] BuildError),
}

/// Build the router described by `config`.
pub fn build_router(config: &RouterConfig) -> Result<Router, StartupError> {
    validate_config(config).map_err(ConfigError::Validation)?;

    let catch_all = config.catch_all.as_deref();
    let router = if config.routes.is_empty() {
        Router::new(catch_all, config.matching)?
    } else {
        let routes = config
            .routes
            .iter()
            .map(RouteConfig::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Router::with_routes(routes, catch_all, config.matching)?
    };

    tracing::info!(
        routes = router.table().len(),
        catch_all = ?config.catch_all,
        "Router ready"
    );
    Ok(router)
}

pub fn build_history(config: &RouterConfig) -> History {
    History::new(config.history.mode, config.history.base.as_deref())
}

/// Build a navigator (not yet started) from `config`.
pub fn build_navigator(config: &RouterConfig) -> Result<Navigator, StartupError> {
    let router = build_router(config)?;
    Ok(Navigator::new(router, build_history(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ValidationError, Variant};
    use crate::history::HistoryMode;
    use crate::routing::{ResolveError, RouteTarget, ViewId};

    #[test]
    fn test_build_from_presets() {
        for variant in Variant::ALL {
            let config = RouterConfig::for_variant(variant);
            let router = build_router(&config).unwrap();
            assert_eq!(
                router.table().has_catch_all(),
                variant == Variant::PathWithFallback
            );
            assert_eq!(router.resolve("/").unwrap().view, ViewId::image_compressor());
        }
    }

    fn view_route(name: &str, path: &str, view: &str) -> RouteConfig {
        RouteConfig {
            name: name.into(),
            path: path.into(),
            view: Some(view.into()),
            redirect: None,
        }
    }

    #[test]
    fn test_build_with_custom_routes() {
        let mut config = RouterConfig::default();
        config.routes = vec![
            view_route("image", "/image", ViewId::IMAGE_COMPRESSOR),
            view_route("clips", "/clips/*", ViewId::VIDEO_COMPRESSOR),
        ];
        let router = build_router(&config).unwrap();
        assert_eq!(router.table().len(), 3);
        assert_eq!(
            router.resolve("/clips/holiday").unwrap().view,
            ViewId::video_compressor()
        );
        assert_eq!(router.resolve("/").unwrap().view, ViewId::image_compressor());
    }

    #[test]
    fn test_custom_routes_without_image_are_rejected() {
        let mut config = RouterConfig::default();
        config.routes = vec![view_route("video", "/video", ViewId::VIDEO_COMPRESSOR)];

        match build_router(&config) {
            Err(StartupError::Config(ConfigError::Validation(errors))) => {
                assert_eq!(
                    errors,
                    vec![ValidationError::RootUnresolved {
                        target: "/image".into(),
                        source: ResolveError::NoMatch {
                            path: "/image".into()
                        },
                    }]
                );
            }
            other => panic!("expected validation failure, got {:?}", other.map(|_| ())),
        }
        assert!(build_navigator(&config).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = RouterConfig::default();
        config.catch_all = Some("nowhere".into());
        assert!(matches!(
            build_router(&config),
            Err(StartupError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn test_route_compile_requires_one_target() {
        let config = RouteConfig {
            name: "both".into(),
            path: "/both".into(),
            view: Some("v".into()),
            redirect: Some("/x".into()),
        };
        assert_eq!(
            config.compile().unwrap_err(),
            BuildError::InvalidTarget("both".into())
        );

        let config = RouteConfig {
            name: "hop".into(),
            path: "/hop".into(),
            view: None,
            redirect: Some("/video".into()),
        };
        assert_eq!(
            config.compile().unwrap().target(),
            &RouteTarget::Redirect("/video".into())
        );
    }

    #[test]
    fn test_build_history_uses_mode_and_base() {
        let mut config = RouterConfig::for_variant(Variant::PathNoFallback);
        config.history.base = Some("/app/".into());
        let history = build_history(&config);
        assert_eq!(history.mode(), HistoryMode::Path);
        assert_eq!(history.href("/video"), "/app/video");
    }
}
