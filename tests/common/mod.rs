//! Shared helpers for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use framaspace_shell::config::schema::{MountConfig, RouteConfig, ShellConfig};
use framaspace_shell::view::component::{View, ViewComponent};
use framaspace_shell::view::loader::{loader, LoadError, ViewLoader};

/// Minimal view for catalog-driven tests.
pub struct StubView {
    pub id: &'static str,
}

impl View for StubView {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> String {
        self.id.to_string()
    }

    fn render(&self) -> String {
        format!("<main id=\"{}\"></main>\n", self.id)
    }
}

/// Loader that counts how many times it actually runs.
pub fn counting_loader(id: &'static str, calls: Arc<AtomicUsize>) -> ViewLoader {
    loader(move || {
        let calls = calls.clone();
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            // Suspend once so the load is a real async hop.
            tokio::task::yield_now().await;
            Ok(Arc::new(StubView { id }) as ViewComponent)
        }
    })
}

/// Loader that always fails.
pub fn failing_loader(id: &'static str) -> ViewLoader {
    loader(move || async move {
        Err(LoadError::Failed {
            view: id.to_string(),
            reason: "module fetch failed".to_string(),
        })
    })
}

/// Table A: embedded sub-mount, home and about routes.
pub fn embedded_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    config.mount = MountConfig {
        base_path: "/apps/framaspace/apps/framaspace".to_string(),
        origin: None,
    };
    config.routes = vec![
        RouteConfig {
            path: "/".to_string(),
            view: "app".to_string(),
        },
        RouteConfig {
            path: "/about".to_string(),
            view: "about".to_string(),
        },
    ];
    config
}

/// Table B: top-level mount, home route only.
pub fn standalone_config() -> ShellConfig {
    let mut config = ShellConfig::default();
    config.mount = MountConfig {
        base_path: "/apps/framaspace".to_string(),
        origin: None,
    };
    config.routes = vec![RouteConfig {
        path: "/".to_string(),
        view: "app".to_string(),
    }];
    config
}
