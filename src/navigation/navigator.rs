//! Navigation state: the current route and the session history.
//!
//! # Responsibilities
//! - Resolve navigation requests and install the result as current
//! - Keep the session history for back/forward
//! - Notify listeners after every successful navigation
//!
//! # Design Decisions
//! - `&mut self` on every navigation: one resolution at a time
//! - The current route is swapped atomically, readers never see a partial update
//! - A failed resolution changes nothing; the error goes back to the caller

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use thiserror::Error;

use crate::history::History;
use crate::navigation::event::{NavigationDirection, RouteChangeEvent};
use crate::observability::metrics;
use crate::routing::{ResolveError, ResolvedRoute, Router};

/// Errors returned by navigation requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The external address is not under the configured base.
    #[error("address `{0}` is outside the application base")]
    OutsideBase(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

type Listener = Box<dyn Fn(&RouteChangeEvent) + Send + Sync>;

/// Owns the router, the history mode and the currently displayed route.
pub struct Navigator {
    router: Router,
    history: History,
    current: ArcSwapOption<ResolvedRoute>,
    /// Full paths (with query/fragment) of visited entries.
    entries: Vec<String>,
    position: usize,
    listeners: Vec<Listener>,
}

impl Navigator {
    pub fn new(router: Router, history: History) -> Self {
        Self {
            router,
            history,
            current: ArcSwapOption::empty(),
            entries: Vec::new(),
            position: 0,
            listeners: Vec::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The currently displayed route, if any navigation has succeeded.
    pub fn current(&self) -> Option<Arc<ResolvedRoute>> {
        self.current.load_full()
    }

    /// External address of the current route.
    pub fn current_href(&self) -> Option<String> {
        self.current().map(|r| self.history.href(&r.full_path()))
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.position > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Register a listener called after each successful navigation.
    pub fn after_each<F>(&mut self, listener: F)
    where
        F: Fn(&RouteChangeEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Initial navigation. Uses `address` when given, the root otherwise.
    pub fn start(&mut self, address: Option<&str>) -> Result<Arc<ResolvedRoute>, NavigationError> {
        let path = match address {
            Some(address) => self.location_of(address)?,
            None => "/".to_string(),
        };
        tracing::info!(mode = %self.history.mode(), path = %path, "Starting navigation");
        self.replace(&path)
    }

    /// Navigate to a logical path, adding a session history entry.
    pub fn push(&mut self, path: &str) -> Result<Arc<ResolvedRoute>, NavigationError> {
        let resolved = self.router.resolve(path)?;

        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(resolved.full_path());
        self.position = self.entries.len() - 1;

        Ok(self.install(resolved, NavigationDirection::Push))
    }

    /// Navigate to a logical path, overwriting the current entry.
    pub fn replace(&mut self, path: &str) -> Result<Arc<ResolvedRoute>, NavigationError> {
        let resolved = self.router.resolve(path)?;

        match self.entries.get_mut(self.position) {
            Some(entry) => *entry = resolved.full_path(),
            None => {
                self.entries.push(resolved.full_path());
                self.position = self.entries.len() - 1;
            }
        }

        Ok(self.install(resolved, NavigationDirection::Replace))
    }

    /// Navigate to an external address (address bar, popstate).
    pub fn navigate_address(
        &mut self,
        address: &str,
    ) -> Result<Arc<ResolvedRoute>, NavigationError> {
        let path = self.location_of(address)?;
        self.push(&path)
    }

    /// Move `delta` entries through the session history.
    ///
    /// Returns `None` when the move is out of range or `delta` is zero.
    pub fn go(&mut self, delta: isize) -> Option<Result<Arc<ResolvedRoute>, NavigationError>> {
        if delta == 0 {
            return None;
        }
        let target = self.position.checked_add_signed(delta)?;
        let path = self.entries.get(target)?.clone();

        let direction = if delta < 0 {
            NavigationDirection::Back
        } else {
            NavigationDirection::Forward
        };

        Some(match self.router.resolve(&path) {
            Ok(resolved) => {
                self.position = target;
                Ok(self.install(resolved, direction))
            }
            Err(err) => Err(err.into()),
        })
    }

    pub fn back(&mut self) -> Option<Result<Arc<ResolvedRoute>, NavigationError>> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Result<Arc<ResolvedRoute>, NavigationError>> {
        self.go(1)
    }

    fn location_of(&self, address: &str) -> Result<String, NavigationError> {
        self.history
            .location(address)
            .ok_or_else(|| NavigationError::OutsideBase(address.to_string()))
    }

    fn install(
        &self,
        resolved: ResolvedRoute,
        direction: NavigationDirection,
    ) -> Arc<ResolvedRoute> {
        let resolved = Arc::new(resolved);
        let previous = self.current.swap(Some(resolved.clone()));

        let event = RouteChangeEvent {
            from: previous.map(|p| p.path.clone()),
            to: resolved.path.clone(),
            view: resolved.view.to_string(),
            direction,
        };

        tracing::info!(
            from = ?event.from,
            to = %event.to,
            view = %event.view,
            direction = direction.as_str(),
            href = %self.history.href(&resolved.full_path()),
            "Navigated"
        );
        metrics::record_navigation(direction.as_str());

        for listener in &self.listeners {
            listener(&event);
        }

        resolved
    }
}
