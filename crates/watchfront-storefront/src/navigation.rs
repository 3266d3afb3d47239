//! Navigation to product detail views.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use watchfront_commerce::ProductId;

/// A place the storefront can send the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The detail view for one product.
    ProductDetail(ProductId),
}

impl Route {
    /// URL path for the route.
    pub fn path(&self) -> String {
        match self {
            Route::ProductDetail(id) => format!("/products/{}", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Router collaborator. The session asks it to move; it decides how.
pub trait Navigator: Send + Sync {
    /// Request a transition to `route`.
    fn navigate(&self, route: Route);
}

/// Navigator that only remembers where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    /// Create a navigator with an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every route requested so far, oldest first.
    pub fn history(&self) -> Vec<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent route.
    pub fn current(&self) -> Option<Route> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(path = %route, "navigate");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(route);
    }
}
