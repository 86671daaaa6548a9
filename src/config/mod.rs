//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShellConfig (validated, immutable)
//!     → shared with the shell at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the mount is fixed for the process lifetime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::MountConfig;
pub use schema::RouteConfig;
pub use schema::ShellConfig;
pub use validation::{validate_config, ValidationError};
