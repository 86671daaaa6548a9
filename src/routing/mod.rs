//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path)
//!     → router.rs (base-path strip, normalize, lookup)
//!     → table.rs (exact match, registration order)
//!     → Return: matched Route or explicit NotFound
//!
//! Table Compilation (at registration):
//!     RouteConfig[]
//!     → Resolve view ids against the catalog
//!     → Reject duplicates / missing root
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Tables compiled at registration, immutable at runtime
//! - Exact string matching only (no parameters in the route set)
//! - Deterministic: same input always matches same route
//! - First match wins (registration order)

pub mod router;
pub mod table;

pub use router::{NavigationError, NavigationPhase, ViewRouter};
pub use table::{Route, RouteTable, TableError};
