//! Route change notifications.

use serde::Serialize;

/// How a navigation moved through the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    /// A new entry was pushed.
    Push,
    /// The current entry was overwritten.
    Replace,
    Back,
    Forward,
}

impl NavigationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationDirection::Push => "push",
            NavigationDirection::Replace => "replace",
            NavigationDirection::Back => "back",
            NavigationDirection::Forward => "forward",
        }
    }
}

/// Emitted after a navigation installs a new current route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteChangeEvent {
    /// Previous path (None on the first navigation).
    pub from: Option<String>,
    pub to: String,
    pub view: String,
    pub direction: NavigationDirection,
}
