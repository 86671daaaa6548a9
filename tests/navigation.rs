//! End-to-end navigation tests over the two shipped deployment variants.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use framaspace_shell::config::loader::parse_config;
use framaspace_shell::config::ConfigError;
use framaspace_shell::routing::router::NavigationError;
use framaspace_shell::shell::{Shell, ShellError};
use framaspace_shell::view::catalog::ViewCatalog;
use framaspace_shell::view::component::View;
use framaspace_shell::NavigationPhase;

mod common;

#[tokio::test]
async fn test_embedded_home_navigation() {
    let shell = Shell::new(common::embedded_config()).unwrap();

    let component = shell.navigate("/").await.unwrap();

    assert_eq!(component.id(), "app");
    assert_eq!(shell.current_route().unwrap().path, "/");
    assert_eq!(shell.router().phase(), NavigationPhase::Resolved);
}

#[tokio::test]
async fn test_embedded_about_navigation() {
    let shell = Shell::new(common::embedded_config()).unwrap();

    let component = shell.navigate("/about").await.unwrap();
    assert_eq!(component.id(), "about");

    // The same view resolves from the full browser location.
    let component = shell
        .navigate("/apps/framaspace/apps/framaspace/about")
        .await
        .unwrap();
    assert_eq!(component.id(), "about");
}

#[tokio::test]
async fn test_standalone_has_no_about_route() {
    let shell = Shell::new(common::standalone_config()).unwrap();

    shell.navigate("/").await.unwrap();
    let err = shell.navigate("/about").await.unwrap_err();

    assert!(matches!(err, NavigationError::NotFound { .. }));
    // The earlier successful resolution is retained.
    assert_eq!(shell.current_route().unwrap().path, "/");
}

#[tokio::test]
async fn test_current_route_none_before_navigation() {
    let shell = Shell::new(common::embedded_config()).unwrap();
    assert!(shell.current_route().is_none());
    assert_eq!(shell.router().phase(), NavigationPhase::Idle);
}

#[tokio::test]
async fn test_repeat_navigation_loads_module_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut catalog = ViewCatalog::new();
    catalog
        .register("app", common::counting_loader("app", calls.clone()))
        .unwrap();

    let shell = Shell::with_catalog(common::standalone_config(), catalog).unwrap();

    let first = shell.navigate("/").await.unwrap();
    let second = shell.navigate("/").await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(first.id(), second.id());
    assert_eq!(shell.current_route().unwrap().path, "/");
}

#[tokio::test]
async fn test_load_failure_reaches_caller() {
    let mut catalog = ViewCatalog::new();
    catalog.register("app", common::failing_loader("app")).unwrap();

    let shell = Shell::with_catalog(common::standalone_config(), catalog).unwrap();

    let err = shell.navigate("/").await.unwrap_err();
    assert!(matches!(err, NavigationError::Load { .. }));
    assert_eq!(shell.router().phase(), NavigationPhase::LoadFailed);
    // Resolution succeeded before the loader ran.
    assert_eq!(shell.current_route().unwrap().path, "/");
}

#[tokio::test]
async fn test_unknown_view_fails_assembly() {
    let mut config = common::standalone_config();
    config.routes[0].view = "files".to_string();

    let err = Shell::new(config).unwrap_err();
    assert!(matches!(err, ShellError::UnknownView { .. }));
}

#[test]
fn test_duplicate_route_rejected_at_parse() {
    let err = parse_config(
        r#"
        [[routes]]
        path = "/"
        view = "app"

        [[routes]]
        path = "/"
        view = "about"
        "#,
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_shipped_variants_parse() {
    for file in ["config/embedded.toml", "config/standalone.toml"] {
        let content = std::fs::read_to_string(file).unwrap();
        let config = parse_config(&content).unwrap();
        assert!(config.routes.iter().any(|r| r.path == "/"), "{file}");
    }
}

#[tokio::test]
async fn test_sections_listing() {
    let shell = Shell::new(common::embedded_config()).unwrap();
    let sections = shell.sections().ordered();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id(), "framaspace");
    assert_eq!(sections[0].priority(), 80);
    assert_eq!(
        sections[0].icon_url(),
        "/apps/framaspace/apps/framaspace/img/app-dark.svg"
    );
}

#[tokio::test]
async fn test_services_registered() {
    let shell = Shell::new(common::embedded_config()).unwrap();

    assert!(shell.services().get("navigation").is_some());
    assert!(shell.services().get("urls").is_some());
    assert_eq!(
        shell.services().ids().collect::<Vec<_>>(),
        vec!["navigation", "urls"]
    );
}
