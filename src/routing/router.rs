//! Route resolution and navigation.
//!
//! # Data Flow
//! ```text
//! navigate(path)
//!     → strip base path, normalize
//!     → exact match against compiled table (first match wins)
//!     → record current route
//!     → loader cache (memoized async load)
//!     → Resolved | NotFound | LoadFailed
//! ```
//!
//! # Design Decisions
//! - Table compiled at registration, immutable afterwards (atomic swap)
//! - Resolution is a pure lookup; only `navigate` mutates navigation state
//! - A failed navigation never clears the previously resolved route
//! - No cancellation: an in-flight load is not aborted by a newer navigation

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;

use arc_swap::{ArcSwap, ArcSwapOption};
use thiserror::Error;

use crate::observability::metrics;
use crate::routing::table::{Route, RouteTable, TableError};
use crate::view::component::ViewComponent;
use crate::view::loader::{LoadError, LoaderCache};

/// Errors surfaced by resolution and navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// No registered route matches the requested path.
    #[error("no route matches path {path:?}")]
    NotFound { path: String },

    /// The matched route's view failed to load.
    #[error("failed to load view for {path:?}")]
    Load {
        path: String,
        #[source]
        source: LoadError,
    },
}

/// Where the router is in its navigation lifecycle.
///
/// `Resolved`, `NotFound`, and `LoadFailed` are terminal; the next
/// `navigate` call restarts the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NavigationPhase {
    Idle = 0,
    Resolving = 1,
    Resolved = 2,
    NotFound = 3,
    LoadFailed = 4,
}

impl NavigationPhase {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => NavigationPhase::Resolving,
            2 => NavigationPhase::Resolved,
            3 => NavigationPhase::NotFound,
            4 => NavigationPhase::LoadFailed,
            _ => NavigationPhase::Idle,
        }
    }
}

/// Resolves paths to routes and materializes their views.
///
/// Owns the navigation state: readers observe consistent snapshots because
/// the current route and phase are swapped atomically, and the only
/// suspension point is the loader await inside [`navigate`](Self::navigate).
pub struct ViewRouter {
    /// Deployment prefix stripped from incoming paths.
    base_path: String,
    table: ArcSwap<RouteTable>,
    current: ArcSwapOption<Route>,
    phase: AtomicU8,
    cache: LoaderCache,
}

impl ViewRouter {
    /// Build a router over an initial route table.
    pub fn new(base_path: impl Into<String>, routes: Vec<Route>) -> Result<Self, TableError> {
        let table = RouteTable::compile(routes)?;
        Ok(Self {
            base_path: normalize_base(base_path.into()),
            table: ArcSwap::from_pointee(table),
            current: ArcSwapOption::empty(),
            phase: AtomicU8::new(NavigationPhase::Idle as u8),
            cache: LoaderCache::new(),
        })
    }

    /// Replace the route table. Navigation state is untouched.
    pub fn register_routes(&self, routes: Vec<Route>) -> Result<(), TableError> {
        let table = RouteTable::compile(routes)?;
        tracing::info!(routes = table.len(), "Route table registered");
        self.table.store(Arc::new(table));
        Ok(())
    }

    /// The deployment prefix this router strips from incoming paths.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// All registered routes, in precedence order.
    pub fn routes(&self) -> Vec<Arc<Route>> {
        self.table.load().routes().cloned().collect()
    }

    /// Resolve a path to its route without touching navigation state.
    pub fn resolve(&self, path: &str) -> Result<Arc<Route>, NavigationError> {
        let target = self.target_path(path);
        self.table
            .load()
            .lookup(&target)
            .ok_or_else(|| NavigationError::NotFound {
                path: path.to_string(),
            })
    }

    /// Navigate to `path`: resolve, record the route, materialize its view.
    ///
    /// The caller is suspended while the view loads. A repeat navigation to
    /// the same path is served from the loader cache. No timeout is applied;
    /// a hung loader leaves the phase at `Resolving`.
    pub async fn navigate(&self, path: &str) -> Result<ViewComponent, NavigationError> {
        let navigation_id = uuid::Uuid::new_v4();
        let started = Instant::now();
        self.set_phase(NavigationPhase::Resolving);

        tracing::debug!(
            navigation_id = %navigation_id,
            path = %path,
            "Navigating"
        );

        let route = match self.resolve(path) {
            Ok(route) => route,
            Err(err) => {
                self.set_phase(NavigationPhase::NotFound);
                metrics::record_navigation("not_found", started);
                tracing::warn!(navigation_id = %navigation_id, path = %path, "No route matched");
                return Err(err);
            }
        };

        // Resolution succeeded: this is now the current route, whatever the
        // loader does next.
        self.current.store(Some(route.clone()));

        match self.cache.load(&route.view, &route.loader).await {
            Ok(component) => {
                self.set_phase(NavigationPhase::Resolved);
                metrics::record_navigation("resolved", started);
                tracing::info!(
                    navigation_id = %navigation_id,
                    path = %path,
                    view = %route.view,
                    "View resolved"
                );
                Ok(component)
            }
            Err(source) => {
                self.set_phase(NavigationPhase::LoadFailed);
                metrics::record_navigation("load_failed", started);
                tracing::error!(
                    navigation_id = %navigation_id,
                    path = %path,
                    view = %route.view,
                    error = %source,
                    "View load failed"
                );
                Err(NavigationError::Load {
                    path: path.to_string(),
                    source,
                })
            }
        }
    }

    /// Most recently resolved route, or `None` before the first resolution.
    pub fn current_route(&self) -> Option<Arc<Route>> {
        self.current.load_full()
    }

    /// Current point in the navigation lifecycle.
    pub fn phase(&self) -> NavigationPhase {
        NavigationPhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    fn set_phase(&self, phase: NavigationPhase) {
        self.phase.store(phase as u8, Ordering::Release);
    }

    /// Strip the base path and normalize into a matchable target.
    ///
    /// Full browser locations carry the base prefix; app-relative paths do
    /// not. The prefix only strips at a segment boundary, so a sibling
    /// mount like `<base>2` is left alone.
    fn target_path(&self, path: &str) -> String {
        let path = match path.find(['?', '#']) {
            Some(idx) => &path[..idx],
            None => path,
        };

        let stripped = if self.base_path != "/" && path.starts_with(self.base_path.as_str()) {
            let rest = &path[self.base_path.len()..];
            if rest.is_empty() {
                "/"
            } else if rest.starts_with('/') {
                rest
            } else {
                path
            }
        } else {
            path
        };

        normalize(stripped)
    }
}

fn normalize(path: &str) -> String {
    let mut normalized = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

fn normalize_base(base: String) -> String {
    let trimmed = base.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
