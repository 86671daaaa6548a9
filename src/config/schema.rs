//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the shell.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the application shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Deployment mount point (base path, optional origin).
    pub mount: MountConfig,

    /// Route definitions mapping paths to views.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Settings-section registration.
    pub settings: SettingsConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount: MountConfig::default(),
            routes: vec![RouteConfig {
                path: "/".to_string(),
                view: "app".to_string(),
            }],
            observability: ObservabilityConfig::default(),
            settings: SettingsConfig::default(),
        }
    }
}

/// Deployment mount configuration.
///
/// The base path is supplied by the deployment (it is the output of the
/// host's URL generation, not something the shell computes) and is fixed
/// for the process lifetime.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MountConfig {
    /// Absolute path prefix under which the app is mounted
    /// (e.g., "/apps/framaspace").
    pub base_path: String,

    /// Origin used for absolute link generation
    /// (e.g., "https://cloud.example.org"). Optional.
    pub origin: Option<String>,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            base_path: "/apps/framaspace".to_string(),
            origin: None,
        }
    }
}

/// Route configuration binding a path to a named view.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Absolute, '/'-rooted path, matched exactly. Unique per table.
    pub path: String,

    /// Identifier of the view to load (must exist in the view catalog).
    pub view: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Settings-section configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Icon file for the admin section, resolved under the app's img/ path.
    pub icon: String,

    /// Ordering priority within the settings listing (lower appears first).
    pub priority: u32,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            icon: "app-dark.svg".to_string(),
            priority: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.mount.base_path, "/apps/framaspace");
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[0].view, "app");
        assert_eq!(config.settings.priority, 80);
    }

    #[test]
    fn test_minimal_toml() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.mount.base_path, "/apps/framaspace");
        assert_eq!(config.observability.log_level, "info");
    }
}
