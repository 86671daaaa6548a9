//! Named logging capability handed to services.

/// Logger injected into a service at construction.
///
/// Wraps the tracing backbone so every event carries the owning service's
/// name. Services receive this explicitly; nothing reaches for a global.
#[derive(Debug, Clone)]
pub struct Logger {
    service: String,
}

impl Logger {
    pub(crate) fn named(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    /// Name this logger was issued under.
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!(service = %self.service, "{}", message);
    }

    pub fn info(&self, message: &str) {
        tracing::info!(service = %self.service, "{}", message);
    }

    pub fn warn(&self, message: &str) {
        tracing::warn!(service = %self.service, "{}", message);
    }

    pub fn error(&self, message: &str) {
        tracing::error!(service = %self.service, "{}", message);
    }
}
