//! URL service: link generation for the rest of the app.

use std::sync::Arc;

use crate::services::logger::Logger;
use crate::services::registry::AppService;
use crate::url::generator::{UrlError, UrlGenerator};

/// Hands out deployment-aware links.
pub struct UrlService {
    logger: Logger,
    urls: Arc<UrlGenerator>,
}

impl UrlService {
    /// Construct with an injected logger and the generator to wrap.
    pub fn new(logger: Logger, urls: Arc<UrlGenerator>) -> Self {
        Self { logger, urls }
    }

    /// Deployment path for an app-relative path.
    pub fn link(&self, relative: &str) -> String {
        self.urls.generate(relative)
    }

    /// Deployment path for a bundled image.
    pub fn icon(&self, file: &str) -> String {
        self.urls.image_path(file)
    }

    /// Absolute link against the configured origin.
    pub fn absolute_link(&self, relative: &str) -> Result<String, UrlError> {
        match self.urls.absolute(relative) {
            Ok(link) => Ok(link),
            Err(err) => {
                self.logger.warn(&format!("absolute link for {relative:?} failed: {err}"));
                Err(err)
            }
        }
    }
}

impl AppService for UrlService {
    fn service_id(&self) -> &str {
        "urls"
    }
}
