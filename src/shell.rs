//! Shell composition root.
//!
//! # Responsibilities
//! - Build the URL generator from the mount config
//! - Compile configured routes against the view catalog
//! - Register services and settings sections
//! - Expose navigation and current-view state to the host

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::ShellConfig;
use crate::routing::router::{NavigationError, ViewRouter};
use crate::routing::table::{Route, TableError};
use crate::services::navigation::NavigationService;
use crate::services::registry::{ServiceContext, ServiceError, ServiceRegistry};
use crate::services::urls::UrlService;
use crate::settings::l10n::{StaticCatalog, Translator};
use crate::settings::section::{AdminSection, SectionError, SectionRegistry};
use crate::url::generator::UrlGenerator;
use crate::view::catalog::ViewCatalog;
use crate::view::component::ViewComponent;

/// Errors raised while assembling the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A route references a view the catalog does not know.
    #[error("route {path:?} references unknown view {view:?}")]
    UnknownView { path: String, view: String },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Section(#[from] SectionError),
}

/// The assembled application shell.
pub struct Shell {
    config: ShellConfig,
    urls: Arc<UrlGenerator>,
    router: Arc<ViewRouter>,
    navigation: Arc<NavigationService>,
    services: ServiceRegistry,
    sections: SectionRegistry,
}

impl std::fmt::Debug for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shell").finish_non_exhaustive()
    }
}

impl Shell {
    /// Assemble a shell from validated configuration and the built-in views.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        Self::with_catalog(config, ViewCatalog::builtin())
    }

    /// Assemble with a caller-supplied view catalog.
    pub fn with_catalog(config: ShellConfig, catalog: ViewCatalog) -> Result<Self, ShellError> {
        let urls = Arc::new(UrlGenerator::new(&config.mount));

        let mut routes = Vec::with_capacity(config.routes.len());
        for route_config in &config.routes {
            let loader =
                catalog
                    .get(&route_config.view)
                    .ok_or_else(|| ShellError::UnknownView {
                        path: route_config.path.clone(),
                        view: route_config.view.clone(),
                    })?;
            routes.push(Route {
                path: route_config.path.clone(),
                view: route_config.view.clone(),
                loader,
            });
        }

        let router = Arc::new(ViewRouter::new(urls.base_path(), routes)?);

        let ctx = ServiceContext::new(crate::APP_ID);
        let navigation = Arc::new(NavigationService::new(
            ctx.logger("navigation"),
            router.clone(),
        ));
        let url_service = Arc::new(UrlService::new(ctx.logger("urls"), urls.clone()));

        let mut services = ServiceRegistry::new();
        services.register(navigation.clone())?;
        services.register(url_service)?;

        let l10n: Arc<dyn Translator> = Arc::new(StaticCatalog::new());
        let mut sections = SectionRegistry::new();
        sections.register(Arc::new(AdminSection::new(
            l10n,
            urls.clone(),
            &config.settings,
        )))?;

        tracing::info!(
            base_path = %router.base_path(),
            routes = config.routes.len(),
            services = services.count(),
            "Shell assembled"
        );

        Ok(Self {
            config,
            urls,
            router,
            navigation,
            services,
            sections,
        })
    }

    /// Navigate to `path` and return the materialized view.
    pub async fn navigate(&self, path: &str) -> Result<ViewComponent, NavigationError> {
        self.navigation.open(path).await
    }

    /// Most recently resolved route.
    pub fn current_route(&self) -> Option<Arc<Route>> {
        self.router.current_route()
    }

    pub fn router(&self) -> &Arc<ViewRouter> {
        &self.router
    }

    pub fn urls(&self) -> &Arc<UrlGenerator> {
        &self.urls
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_unknown_view_rejected() {
        let mut config = ShellConfig::default();
        config.routes.push(RouteConfig {
            path: "/files".into(),
            view: "files".into(),
        });

        let err = Shell::new(config).unwrap_err();
        assert!(matches!(err, ShellError::UnknownView { .. }));
    }

    #[test]
    fn test_default_shell_assembles() {
        let shell = Shell::new(ShellConfig::default()).unwrap();
        assert_eq!(shell.router().base_path(), "/apps/framaspace");
        assert_eq!(shell.services().count(), 2);
        assert_eq!(shell.sections().count(), 1);
        assert!(shell.current_route().is_none());
    }
}
