//! Settings sections surfaced in the host's admin UI.
//!
//! The host framework defines the contract (id, localized name, icon,
//! priority); sections here are small value-returning adapters over the
//! app's own collaborators.

use std::sync::Arc;

use thiserror::Error;

use crate::config::schema::SettingsConfig;
use crate::settings::l10n::Translator;
use crate::url::generator::UrlGenerator;

/// Capability contract for a settings section.
pub trait SettingsSection: Send + Sync {
    /// Section identifier, unique within the registry.
    fn id(&self) -> &str;

    /// Localized display name.
    fn display_name(&self) -> String;

    /// Deployment path of the section icon.
    fn icon_url(&self) -> String;

    /// Ordering priority; lower values are listed first.
    fn priority(&self) -> u32;
}

/// The app's admin settings section.
pub struct AdminSection {
    l10n: Arc<dyn Translator>,
    urls: Arc<UrlGenerator>,
    icon: String,
    priority: u32,
}

impl AdminSection {
    /// Construct from the app's collaborators and settings config.
    pub fn new(
        l10n: Arc<dyn Translator>,
        urls: Arc<UrlGenerator>,
        settings: &SettingsConfig,
    ) -> Self {
        Self {
            l10n,
            urls,
            icon: settings.icon.clone(),
            priority: settings.priority,
        }
    }
}

impl SettingsSection for AdminSection {
    fn id(&self) -> &str {
        crate::APP_ID
    }

    fn display_name(&self) -> String {
        self.l10n.translate(crate::APP_ID)
    }

    fn icon_url(&self) -> String {
        self.urls.image_path(&self.icon)
    }

    fn priority(&self) -> u32 {
        self.priority
    }
}

/// Error type for section registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    /// A section with this id is already registered.
    #[error("settings section {id:?} is already registered")]
    Duplicate { id: String },
}

/// Registry of settings sections, listed in priority order.
#[derive(Default)]
pub struct SectionRegistry {
    sections: Vec<Arc<dyn SettingsSection>>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section; duplicate ids are rejected.
    pub fn register(&mut self, section: Arc<dyn SettingsSection>) -> Result<(), SectionError> {
        if self.sections.iter().any(|s| s.id() == section.id()) {
            return Err(SectionError::Duplicate {
                id: section.id().to_string(),
            });
        }
        self.sections.push(section);
        Ok(())
    }

    /// Sections ordered by ascending priority, ties by id.
    pub fn ordered(&self) -> Vec<Arc<dyn SettingsSection>> {
        let mut sections = self.sections.clone();
        sections.sort_by(|a, b| {
            a.priority()
                .cmp(&b.priority())
                .then_with(|| a.id().cmp(b.id()))
        });
        sections
    }

    /// Number of registered sections.
    pub fn count(&self) -> usize {
        self.sections.len()
    }
}
