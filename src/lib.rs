//! FramaSpace application shell.
//!
//! Client-side core of the FramaSpace app: a view router that resolves
//! deployment paths to lazily loaded views, plus the registration surfaces
//! the hosting framework expects (named services, settings sections).
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 SHELL                        │
//!                      │                                              │
//!   Navigation target  │  ┌─────────┐    ┌─────────┐    ┌──────────┐  │
//!   ──────────────────▶│  │ routing │───▶│  view   │───▶│ rendered │  │
//!                      │  │ (match) │    │ (load)  │    │   view   │  │
//!                      │  └────┬────┘    └─────────┘    └──────────┘  │
//!                      │       │ base path                            │
//!                      │  ┌────┴────┐  ┌──────────┐  ┌─────────────┐  │
//!                      │  │   url   │  │ services │  │  settings   │  │
//!                      │  │generator│  │ registry │  │  sections   │  │
//!                      │  └─────────┘  └──────────┘  └─────────────┘  │
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │   config        observability          │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod routing;
pub mod view;

// Registration surfaces
pub mod services;
pub mod settings;

// Cross-cutting concerns
pub mod observability;
pub mod url;

pub mod shell;

/// Application identifier used for service naming, icons, and sections.
pub const APP_ID: &str = "framaspace";

pub use config::schema::ShellConfig;
pub use routing::router::{NavigationError, NavigationPhase, ViewRouter};
pub use shell::{Shell, ShellError};
