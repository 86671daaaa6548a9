//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce route-table invariants (unique paths, a "/" route exists)
//! - Validate value shapes (paths rooted, view ids non-empty, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use thiserror::Error;

use crate::config::schema::ShellConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic fault in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two routes share the same path.
    #[error("duplicate route path {path:?}")]
    DuplicateRoutePath { path: String },

    /// A route path is not '/'-rooted.
    #[error("route path {path:?} must start with '/'")]
    PathNotRooted { path: String },

    /// A route names no view.
    #[error("route {path:?} has an empty view id")]
    EmptyViewId { path: String },

    /// The route table is empty.
    #[error("route table must contain at least one route")]
    NoRoutes,

    /// No route covers the root path.
    #[error("no route covers the root path \"/\"")]
    MissingRootRoute,

    /// The mount base path is not '/'-rooted.
    #[error("base path {base_path:?} must start with '/'")]
    BasePathNotRooted { base_path: String },

    /// The configured log level is not one the subscriber understands.
    #[error("unknown log level {level:?}")]
    UnknownLogLevel { level: String },
}

/// Validate a parsed configuration, collecting every fault.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.mount.base_path.starts_with('/') {
        errors.push(ValidationError::BasePathNotRooted {
            base_path: config.mount.base_path.clone(),
        });
    }

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut seen = HashSet::new();
    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::PathNotRooted {
                path: route.path.clone(),
            });
        }
        if route.view.is_empty() {
            errors.push(ValidationError::EmptyViewId {
                path: route.path.clone(),
            });
        }
        if !seen.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicateRoutePath {
                path: route.path.clone(),
            });
        }
    }

    if !config.routes.is_empty() && !seen.contains("/") {
        errors.push(ValidationError::MissingRootRoute);
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ShellConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_route_path() {
        let mut config = ShellConfig::default();
        config.routes.push(RouteConfig {
            path: "/".into(),
            view: "about".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateRoutePath { path: "/".into() }]
        );
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = ShellConfig::default();
        config.mount.base_path = "apps/framaspace".into();
        config.routes[0].path = "about".into();
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::BasePathNotRooted {
            base_path: "apps/framaspace".into()
        }));
        assert!(errors.contains(&ValidationError::PathNotRooted {
            path: "about".into()
        }));
        assert!(errors.contains(&ValidationError::MissingRootRoute));
        assert!(errors.contains(&ValidationError::UnknownLogLevel {
            level: "loud".into()
        }));
    }

    #[test]
    fn test_empty_table_rejected() {
        let mut config = ShellConfig::default();
        config.routes.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoRoutes]);
    }
}
