//! Deployment URL generation.

use thiserror::Error;
use url::Url;

use crate::config::schema::MountConfig;

/// Errors raised while generating URLs.
#[derive(Debug, Error)]
pub enum UrlError {
    /// Absolute links need a configured origin.
    #[error("no origin configured for absolute URL generation")]
    MissingOrigin,

    /// The configured origin is not a valid URL.
    #[error("invalid origin {origin:?}")]
    InvalidOrigin {
        origin: String,
        #[source]
        source: url::ParseError,
    },
}

/// Converts app-relative paths into deployment paths.
///
/// The shell mounts under a deployment-specific prefix; every link the app
/// emits goes through here so the prefix is applied in exactly one place.
/// The router consumes [`base_path`](Self::base_path) as an opaque string.
#[derive(Debug, Clone)]
pub struct UrlGenerator {
    /// Mount prefix without a trailing slash; empty for a root mount.
    base: String,
    origin: Option<String>,
}

impl UrlGenerator {
    /// Build a generator for the given mount.
    pub fn new(mount: &MountConfig) -> Self {
        let trimmed = mount.base_path.trim_end_matches('/');
        let base = if trimmed.is_empty() || trimmed == "/" {
            String::new()
        } else if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        Self {
            base,
            origin: mount.origin.clone(),
        }
    }

    /// The deployment prefix all generated paths share.
    pub fn base_path(&self) -> &str {
        if self.base.is_empty() {
            "/"
        } else {
            &self.base
        }
    }

    /// Join the base path with an app-relative path.
    pub fn generate(&self, relative: &str) -> String {
        let rel = relative.trim_start_matches('/');
        if rel.is_empty() {
            self.base_path().to_string()
        } else {
            format!("{}/{}", self.base, rel)
        }
    }

    /// Path to an image bundled with the app (`<base>/img/<file>`).
    pub fn image_path(&self, file: &str) -> String {
        self.generate(&format!("img/{}", file.trim_start_matches('/')))
    }

    /// Absolute URL for an app-relative path, against the configured origin.
    pub fn absolute(&self, relative: &str) -> Result<String, UrlError> {
        let origin = self.origin.as_deref().ok_or(UrlError::MissingOrigin)?;
        let parsed = Url::parse(origin).map_err(|source| UrlError::InvalidOrigin {
            origin: origin.to_string(),
            source,
        })?;
        let joined = parsed
            .join(&self.generate(relative))
            .map_err(|source| UrlError::InvalidOrigin {
                origin: origin.to_string(),
                source,
            })?;
        Ok(joined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mount(base_path: &str, origin: Option<&str>) -> MountConfig {
        MountConfig {
            base_path: base_path.to_string(),
            origin: origin.map(str::to_string),
        }
    }

    #[test]
    fn test_generate_joins_without_doubled_slashes() {
        let urls = UrlGenerator::new(&mount("/apps/framaspace/", None));
        assert_eq!(urls.base_path(), "/apps/framaspace");
        assert_eq!(urls.generate("/about"), "/apps/framaspace/about");
        assert_eq!(urls.generate("about"), "/apps/framaspace/about");
        assert_eq!(urls.generate(""), "/apps/framaspace");
    }

    #[test]
    fn test_root_mount() {
        let urls = UrlGenerator::new(&mount("/", None));
        assert_eq!(urls.base_path(), "/");
        assert_eq!(urls.generate("/about"), "/about");
        assert_eq!(urls.generate(""), "/");
    }

    #[test]
    fn test_image_path() {
        let urls = UrlGenerator::new(&mount("/apps/framaspace", None));
        assert_eq!(
            urls.image_path("app-dark.svg"),
            "/apps/framaspace/img/app-dark.svg"
        );
    }

    #[test]
    fn test_absolute_requires_origin() {
        let urls = UrlGenerator::new(&mount("/apps/framaspace", None));
        assert!(matches!(
            urls.absolute("/about").unwrap_err(),
            UrlError::MissingOrigin
        ));

        let urls = UrlGenerator::new(&mount("/apps/framaspace", Some("https://cloud.example.org")));
        assert_eq!(
            urls.absolute("/about").unwrap(),
            "https://cloud.example.org/apps/framaspace/about"
        );
    }

    #[test]
    fn test_invalid_origin() {
        let urls = UrlGenerator::new(&mount("/apps/framaspace", Some("not a url")));
        assert!(matches!(
            urls.absolute("/").unwrap_err(),
            UrlError::InvalidOrigin { .. }
        ));
    }
}
