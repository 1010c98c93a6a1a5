//! Route definitions and the built-in view table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::matcher::{PatternError, RoutePattern};

/// Path of the image compressor view.
pub const IMAGE_PATH: &str = "/image";

/// Path of the video compressor view.
pub const VIDEO_PATH: &str = "/video";

/// Name of the fixed root redirect.
pub const ROOT_ROUTE: &str = "root";

/// Opaque identifier of a displayable view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub const IMAGE_COMPRESSOR: &'static str = "image-compressor-view";
    pub const VIDEO_COMPRESSOR: &'static str = "video-compressor-view";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn image_compressor() -> Self {
        Self::new(Self::IMAGE_COMPRESSOR)
    }

    pub fn video_compressor() -> Self {
        Self::new(Self::VIDEO_COMPRESSOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a matched route leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// Render a view.
    View(ViewId),

    /// Re-resolve against another path. Never renders directly.
    Redirect(String),
}

/// One entry of the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    name: String,
    pattern: RoutePattern,
    target: RouteTarget,
}

impl Route {
    pub fn new(name: impl Into<String>, pattern: RoutePattern, target: RouteTarget) -> Self {
        Self {
            name: name.into(),
            pattern,
            target,
        }
    }

    /// A route rendering `view` for paths matching `pattern`.
    pub fn view(
        name: impl Into<String>,
        pattern: &str,
        view: impl Into<ViewId>,
    ) -> Result<Self, PatternError> {
        Ok(Self::new(
            name,
            RoutePattern::parse(pattern)?,
            RouteTarget::View(view.into()),
        ))
    }

    /// A route redirecting paths matching `pattern` to `to`.
    pub fn redirect(
        name: impl Into<String>,
        pattern: &str,
        to: impl Into<String>,
    ) -> Result<Self, PatternError> {
        Ok(Self::new(
            name,
            RoutePattern::parse(pattern)?,
            RouteTarget::Redirect(to.into()),
        ))
    }

    /// The fixed `/` → `/image` entry every table starts with.
    pub fn root_seed() -> Self {
        Self::new(
            ROOT_ROUTE,
            RoutePattern::Exact("/".to_string()),
            RouteTarget::Redirect(IMAGE_PATH.to_string()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }
}

/// The two compressor views, without the root seed.
pub fn builtin_routes() -> Vec<Route> {
    vec![
        Route::new(
            "image",
            RoutePattern::Exact(IMAGE_PATH.to_string()),
            RouteTarget::View(ViewId::image_compressor()),
        ),
        Route::new(
            "video",
            RoutePattern::Exact(VIDEO_PATH.to_string()),
            RouteTarget::View(ViewId::video_compressor()),
        ),
    ]
}
