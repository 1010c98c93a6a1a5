//! Metrics collection.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): successful resolutions by view
//! - `router_redirect_chain_length` (histogram): redirects followed per resolution
//! - `router_redirects_total` (counter): redirects followed by route
//! - `router_resolve_failures_total` (counter): failures by kind
//! - `router_navigations_total` (counter): installed navigations by direction
//!
//! # Design Decisions
//! - The library records only; installing an exporter is the host's job
//! - Without a recorder installed every call is a no-op

/// Record a successful resolution.
pub fn record_resolution(view: &str, redirects: usize) {
    metrics::counter!("router_resolutions_total", "view" => view.to_string()).increment(1);
    metrics::histogram!("router_redirect_chain_length").record(redirects as f64);
}

/// Record one redirect hop.
pub fn record_redirect(route: &str) {
    metrics::counter!("router_redirects_total", "route" => route.to_string()).increment(1);
}

/// Record a failed resolution.
pub fn record_failure(kind: &'static str) {
    metrics::counter!("router_resolve_failures_total", "kind" => kind).increment(1);
}

/// Record a navigation installed as the current route.
pub fn record_navigation(direction: &'static str) {
    metrics::counter!("router_navigations_total", "direction" => direction).increment(1);
}
