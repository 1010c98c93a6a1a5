//! Shared fixtures for integration tests.

use view_router::config::{RouterConfig, Variant};
use view_router::lifecycle::{build_navigator, build_router};
use view_router::{Navigator, Router};

/// Router for one of the shipped setups.
#[allow(dead_code)]
pub fn router_for(variant: Variant) -> Router {
    build_router(&RouterConfig::for_variant(variant)).expect("preset config is valid")
}

/// Navigator for one of the shipped setups, not yet started.
#[allow(dead_code)]
pub fn navigator_for(variant: Variant) -> Navigator {
    build_navigator(&RouterConfig::for_variant(variant)).expect("preset config is valid")
}

/// Variants without a catch-all route.
#[allow(dead_code)]
pub fn variants_without_fallback() -> impl Iterator<Item = Variant> {
    Variant::ALL
        .into_iter()
        .filter(|v| *v != Variant::PathWithFallback)
}
