//! Lazy view loading and memoization.
//!
//! # Responsibilities
//! - Define the async loader signature routes carry
//! - Memoize loaded components so repeat navigation does not reload a module
//!
//! # Design Decisions
//! - Loaders are plain async factories; the cache is an optimization,
//!   correctness never depends on it
//! - Load failures surface to the caller; retry policy is the caller's

use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::observability::metrics;
use crate::view::component::ViewComponent;

/// Async factory producing a view component on demand.
pub type ViewLoader =
    Arc<dyn Fn() -> BoxFuture<'static, Result<ViewComponent, LoadError>> + Send + Sync>;

/// Errors raised while materializing a view.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// The view's module could not be fetched or instantiated.
    #[error("loading view {view:?} failed: {reason}")]
    Failed { view: String, reason: String },
}

/// Wrap an async closure as a [`ViewLoader`].
pub fn loader<F, Fut>(f: F) -> ViewLoader
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ViewComponent, LoadError>> + Send + 'static,
{
    Arc::new(move || Box::pin(f()))
}

/// A thread-safe cache of loaded view components, keyed by view id.
#[derive(Clone, Default)]
pub struct LoaderCache {
    inner: Arc<DashMap<String, ViewComponent>>,
}

impl LoaderCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a view through `loader`, reusing a previously loaded component.
    ///
    /// Two concurrent first loads of the same view may both run the loader;
    /// the later insert wins and both callers get a usable component.
    pub async fn load(&self, view: &str, loader: &ViewLoader) -> Result<ViewComponent, LoadError> {
        if let Some(hit) = self.inner.get(view) {
            metrics::record_view_cache("hit");
            return Ok(hit.value().clone());
        }

        metrics::record_view_cache("miss");
        let component = loader().await?;
        self.inner.insert(view.to_string(), component.clone());
        metrics::record_view_cache_size(self.inner.len());

        tracing::debug!(view = %view, "View module loaded");
        Ok(component)
    }

    /// Number of components currently held.
    pub fn count(&self) -> usize {
        self.inner.len()
    }
}
