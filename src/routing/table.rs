//! Route table compilation.
//!
//! # Responsibilities
//! - Freeze an ordered route sequence into an immutable table
//! - Reject duplicate paths, an empty table, and a missing root route
//! - Exact-match lookup, first match in registration order wins

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::view::loader::ViewLoader;

/// A single path → view binding.
#[derive(Clone)]
pub struct Route {
    /// Absolute, '/'-rooted path, matched exactly.
    pub path: String,

    /// Identifier of the view this route materializes.
    pub view: String,

    /// Async factory producing the view component.
    pub loader: ViewLoader,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// Errors raised while compiling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two routes share the same path.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },

    /// A route path is not '/'-rooted.
    #[error("route path {path:?} must start with '/'")]
    PathNotRooted { path: String },

    /// The table has no routes at all.
    #[error("route table must contain at least one route")]
    Empty,

    /// No route covers the root path.
    #[error("route table must contain a \"/\" route")]
    MissingRoot,
}

/// Immutable, compiled route table.
///
/// Compiled once at registration; lookups never mutate. All matching is
/// exact (the route set carries no parameters or wildcards).
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
}

impl RouteTable {
    /// Compile an ordered route sequence, enforcing table invariants.
    pub fn compile(routes: Vec<Route>) -> Result<Self, TableError> {
        if routes.is_empty() {
            return Err(TableError::Empty);
        }

        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(TableError::PathNotRooted {
                    path: route.path.clone(),
                });
            }
            if !seen.insert(route.path.clone()) {
                return Err(TableError::DuplicatePath {
                    path: route.path.clone(),
                });
            }
        }

        if !seen.contains("/") {
            return Err(TableError::MissingRoot);
        }

        Ok(Self {
            routes: routes.into_iter().map(Arc::new).collect(),
        })
    }

    /// First route whose path equals `path`, in registration order.
    pub fn lookup(&self, path: &str) -> Option<Arc<Route>> {
        self.routes.iter().find(|r| r.path == path).cloned()
    }

    /// All routes, in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter()
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table is empty. Compiled tables never are.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::component::{AppView, ViewComponent};
    use crate::view::loader::loader;

    fn route(path: &str, view: &str) -> Route {
        Route {
            path: path.to_string(),
            view: view.to_string(),
            loader: loader(|| async { Ok(Arc::new(AppView) as ViewComponent) }),
        }
    }

    #[test]
    fn test_compile_and_lookup() {
        let table =
            RouteTable::compile(vec![route("/", "app"), route("/about", "about")]).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.lookup("/").unwrap().view, "app");
        assert_eq!(table.lookup("/about").unwrap().view, "about");
        assert!(table.lookup("/missing").is_none());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::compile(vec![route("/", "app"), route("/", "about")]).unwrap_err();
        assert_eq!(err, TableError::DuplicatePath { path: "/".into() });
    }

    #[test]
    fn test_empty_rejected() {
        let err = RouteTable::compile(Vec::new()).unwrap_err();
        assert_eq!(err, TableError::Empty);
    }

    #[test]
    fn test_missing_root_rejected() {
        let err = RouteTable::compile(vec![route("/about", "about")]).unwrap_err();
        assert_eq!(err, TableError::MissingRoot);
    }

    #[test]
    fn test_unrooted_path_rejected() {
        let err = RouteTable::compile(vec![route("about", "about")]).unwrap_err();
        assert_eq!(err, TableError::PathNotRooted { path: "about".into() });
    }
}
