//! Localization collaborator for user-facing strings.

use std::collections::HashMap;

/// Translates source strings for display.
pub trait Translator: Send + Sync {
    /// Translate `source`, falling back to the source string itself.
    fn translate(&self, source: &str) -> String;
}

/// Catalog-backed translator with passthrough fallback.
#[derive(Default)]
pub struct StaticCatalog {
    entries: HashMap<String, String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation pair.
    pub fn with(mut self, source: impl Into<String>, translated: impl Into<String>) -> Self {
        self.entries.insert(source.into(), translated.into());
        self
    }
}

impl Translator for StaticCatalog {
    fn translate(&self, source: &str) -> String {
        self.entries
            .get(source)
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}
