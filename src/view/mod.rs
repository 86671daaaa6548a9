//! View subsystem.
//!
//! # Data Flow
//! ```text
//! RouteConfig.view (id)
//!     → catalog.rs (id → loader)
//!     → loader.rs (async load, memoized per id)
//!     → ViewComponent (shared handle, rendered by the host)
//! ```
//!
//! # Design Decisions
//! - Views are loaded on demand, never at startup
//! - The component handle is shared; loading twice is a cache hit
//! - Unknown view ids fail shell assembly, not navigation

pub mod catalog;
pub mod component;
pub mod loader;

pub use catalog::{CatalogError, ViewCatalog};
pub use component::{View, ViewComponent};
pub use loader::{loader, LoadError, LoaderCache, ViewLoader};
