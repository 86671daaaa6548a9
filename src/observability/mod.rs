//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, navigation ids as fields)
//!     → metrics.rs (counters, gauges, histograms via the metrics facade)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//!     → Whatever recorder the host installs
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
