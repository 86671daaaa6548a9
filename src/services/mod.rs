//! Service registration subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceContext (logger capability)
//!     → concrete service constructors (explicit dependencies)
//!     → registry.rs (register by id, duplicates rejected)
//!     → looked up by the shell / host by name
//! ```

pub mod logger;
pub mod navigation;
pub mod registry;
pub mod urls;

pub use logger::Logger;
pub use navigation::NavigationService;
pub use registry::{AppService, ServiceContext, ServiceError, ServiceRegistry};
pub use urls::UrlService;
