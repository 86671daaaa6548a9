//! View catalog: named loaders backing route configuration.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::view::component::{AboutView, AppView, ViewComponent};
use crate::view::loader::{loader, ViewLoader};

/// Error type for catalog registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A loader is already registered under this id.
    #[error("view {id:?} is already registered")]
    Duplicate { id: String },
}

/// Registry of view loaders, keyed by the ids route configs refer to.
#[derive(Default)]
pub struct ViewCatalog {
    loaders: HashMap<String, ViewLoader>,
}

impl ViewCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of views shipped with the app: "app" (home) and "about".
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        // Ids are distinct, registration cannot fail.
        let _ = catalog.register("app", loader(|| async { Ok(Arc::new(AppView) as ViewComponent) }));
        let _ = catalog.register(
            "about",
            loader(|| async { Ok(Arc::new(AboutView) as ViewComponent) }),
        );
        catalog
    }

    /// Register a loader under `id`.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        loader: ViewLoader,
    ) -> Result<(), CatalogError> {
        let id = id.into();
        if self.loaders.contains_key(&id) {
            return Err(CatalogError::Duplicate { id });
        }
        self.loaders.insert(id, loader);
        Ok(())
    }

    /// Loader for `id`, if registered.
    pub fn get(&self, id: &str) -> Option<ViewLoader> {
        self.loaders.get(id).cloned()
    }

    /// Number of registered views.
    pub fn count(&self) -> usize {
        self.loaders.len()
    }
}
