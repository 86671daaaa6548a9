//! Settings-section subsystem.
//!
//! Adapters conforming to the host framework's settings contract, plus the
//! registry the shell exposes them through.

pub mod l10n;
pub mod section;

pub use l10n::{StaticCatalog, Translator};
pub use section::{AdminSection, SectionError, SectionRegistry, SettingsSection};
