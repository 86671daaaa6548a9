//! Navigation service: the shell's front door to the router.

use std::sync::Arc;

use crate::routing::router::{NavigationError, ViewRouter};
use crate::routing::table::Route;
use crate::services::logger::Logger;
use crate::services::registry::AppService;
use crate::view::component::ViewComponent;

/// Opens views on behalf of the hosting shell.
pub struct NavigationService {
    logger: Logger,
    router: Arc<ViewRouter>,
}

impl NavigationService {
    /// Construct with an injected logger and the router to drive.
    pub fn new(logger: Logger, router: Arc<ViewRouter>) -> Self {
        Self { logger, router }
    }

    /// Navigate to `path` and return the materialized view.
    pub async fn open(&self, path: &str) -> Result<ViewComponent, NavigationError> {
        match self.router.navigate(path).await {
            Ok(component) => Ok(component),
            Err(err) => {
                self.logger.warn(&format!("navigation to {path:?} failed: {err}"));
                Err(err)
            }
        }
    }

    /// Most recently resolved route.
    pub fn current(&self) -> Option<Arc<Route>> {
        self.router.current_route()
    }

    /// The router this service drives.
    pub fn router(&self) -> &Arc<ViewRouter> {
        &self.router
    }
}

impl AppService for NavigationService {
    fn service_id(&self) -> &str {
        "navigation"
    }
}
